//! Records read from a JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::error::{DigestError, DigestResult};
use crate::models::RawRecord;

use super::{RecordSource, decode_records};

/// Reads a saved registry response (a JSON array) from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn fetch(&self) -> DigestResult<Vec<RawRecord>> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DigestError::FetchError {
                url: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let records = decode_records(&body)?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded grant records from file"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
