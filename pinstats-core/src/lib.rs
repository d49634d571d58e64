// Module declarations
pub mod chart;
pub mod conf;
pub mod import;
pub mod metric;
pub mod sqlite;

// Public API re-exports
pub use chart::{ChartBar, ChartPresenter, ChartSpec};
pub use conf::Conf;
pub use import::ImportOutcome;
pub use metric::{Metric, UnknownMetric};
pub use sqlite::model::{NewPost, Post, TopPost};
pub use sqlite::Sqlite;
