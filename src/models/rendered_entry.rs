//! Rendered digest entries.

use serde::{Deserialize, Serialize};

/// One finished, sequence-numbered sentence of the digest.
///
/// The text is plain; escaping for markup is the presenter's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedEntry {
    /// 1-based position in recency order.
    pub sequence: usize,
    /// The rendered sentence, including the `"{sequence}: "` prefix.
    pub text: String,
}

impl std::fmt::Display for RenderedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
