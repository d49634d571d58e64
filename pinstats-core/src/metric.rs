use std::fmt;
use std::str::FromStr;

/// Engagement column a ranking is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Likes,
    Comments,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric '{}', expected 'likes' or 'comments'", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Likes, Metric::Comments];

    /// Column name in the posts table.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Likes => "likes",
            Metric::Comments => "comments",
        }
    }

    /// Capitalized name used in headings and axis labels.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Likes => "Likes",
            Metric::Comments => "Comments",
        }
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.column() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
