use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE: &str = "pinterest.db";
pub const DEFAULT_CSV_FILE: &str = "pinterest_data.csv";
pub const DB_ENV_VAR: &str = "PINSTATS_DB";
pub const CSV_ENV_VAR: &str = "PINSTATS_CSV";

#[derive(Debug, Clone, PartialEq)]
pub struct Conf {
    pub db_file: PathBuf,
    pub csv_file: PathBuf,

    pub sample_limit: i64,
    pub top_limit: i64,
}

impl Conf {
    /// Paths default to the working directory; `PINSTATS_DB` and
    /// `PINSTATS_CSV` override them when set to a non-empty value.
    pub fn new() -> Self {
        let db_file = path_from_env(DB_ENV_VAR).unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
        let csv_file = path_from_env(CSV_ENV_VAR).unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE));
        Self::with_paths(db_file, csv_file)
    }

    pub fn with_paths(db_file: impl AsRef<Path>, csv_file: impl AsRef<Path>) -> Self {
        Conf {
            db_file: db_file.as_ref().to_path_buf(),
            csv_file: csv_file.as_ref().to_path_buf(),
            sample_limit: 5,
            top_limit: 5,
        }
    }
}

impl Default for Conf {
    fn default() -> Self {
        Self::new()
    }
}

fn path_from_env(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
