//! Sources of raw grant records.
//!
//! The pipeline itself never performs I/O. A [`RecordSource`] supplies the
//! full list of raw records: the live registry over HTTPS, a JSON file on
//! disk, or an in-memory list.

mod file;
mod registry;

use async_trait::async_trait;

use crate::error::{DigestError, DigestResult};
use crate::models::RawRecord;

pub use file::FileSource;
pub use registry::RegistryClient;

/// Supplies raw grant records to the digest.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches every available record.
    async fn fetch(&self) -> DigestResult<Vec<RawRecord>>;

    /// Short description of where records come from, used in logs and
    /// response metadata.
    fn describe(&self) -> String;
}

/// A fixed, in-memory list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawRecord>,
}

impl StaticSource {
    /// Creates a source that always returns `records`.
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch(&self) -> DigestResult<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

/// Decodes a registry payload: a JSON array of records.
pub fn decode_records(body: &[u8]) -> DigestResult<Vec<RawRecord>> {
    serde_json::from_slice(body).map_err(|e| DigestError::InvalidPayload {
        message: e.to_string(),
    })
}
