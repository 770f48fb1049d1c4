// src/source.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::record::Record;

pub use crate::core::net::ApiSource;

/// Where records come from. A failure is reported by the runner and then
/// treated the same as an empty result.
pub trait RecordSource {
    fn fetch(&self, query: &str) -> Result<Vec<Record>>;
}

/// Records from a local JSON array, shaped like the API's response.
/// Keeps records whose name contains the query, ignoring case; an empty query keeps all.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn fetch(&self, query: &str) -> Result<Vec<Record>> {
        let text = fs::read_to_string(&self.path)?;
        let mut records: Vec<Record> = serde_json::from_str(&text)?;

        let needle = query.trim().to_lowercase();
        if !needle.is_empty() {
            records.retain(|r| r.name.to_lowercase().contains(&needle));
        }
        debug!(path = %self.path.display(), %query, count = records.len(), "records loaded");
        Ok(records)
    }
}

/// A fixed list, handy for tests and benches.
impl RecordSource for Vec<Record> {
    fn fetch(&self, _query: &str) -> Result<Vec<Record>> {
        Ok(self.clone())
    }
}
