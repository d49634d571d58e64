use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::sqlite::model::NewPost;

/// Result of a CSV import run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Number of rows appended to the posts table.
    Imported(usize),
    /// The CSV file was not found; nothing was written.
    MissingFile(PathBuf),
}

pub fn post_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

pub fn open_post_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
    Ok(post_reader(file))
}

/// Deserializes every record up front. Stops at the first bad record.
/// Rows shorter than the header are padded with empty fields, so a missing
/// trailing `category` reads as "".
pub fn read_posts<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<NewPost>> {
    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let mut posts = Vec::new();
    for record in reader.records() {
        let mut record = record.context("Failed to read CSV record")?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        let post: NewPost = record
            .deserialize(Some(&headers))
            .context("Failed to parse CSV record")?;
        posts.push(post);
    }
    Ok(posts)
}
