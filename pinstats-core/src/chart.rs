// Chart description shared by the CLI and whatever draws it on screen.

use anyhow::Result;

use crate::metric::Metric;
use crate::sqlite::model::TopPost;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bottom-to-top. The highest value comes last so it is drawn on top.
    pub bars: Vec<ChartBar>,
}

impl ChartSpec {
    /// `rows` is expected in descending metric order, as `Sqlite::top_posts`
    /// returns it.
    pub fn top_posts(metric: Metric, limit: i64, rows: &[TopPost]) -> Self {
        let bars = rows
            .iter()
            .rev()
            .map(|row| ChartBar {
                label: row.title.clone(),
                value: row.value,
            })
            .collect();

        ChartSpec {
            title: format!("Top {} Posts by {}", limit, metric.label()),
            x_label: metric.label().to_string(),
            y_label: "Post Title".to_string(),
            bars,
        }
    }

    pub fn max_value(&self) -> i64 {
        self.bars.iter().map(|bar| bar.value).max().unwrap_or(0)
    }
}

/// Something able to show a chart to the user. Implementations block until
/// the user is done looking at it.
pub trait ChartPresenter {
    fn present(&self, spec: &ChartSpec) -> Result<()>;
}
