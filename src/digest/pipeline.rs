//! The composed grant digest pipeline.

use tracing::debug;

use crate::error::DigestResult;
use crate::models::{NormalizedRecord, RawRecord, RenderedEntry};

use super::amount_format::AmountFormatter;
use super::capitalizer::Capitalizer;
use super::date_normalizer::normalize_record;
use super::ranker::{DEFAULT_DIGEST_LIMIT, rank_by_recency};
use super::sentence_builder::SentenceBuilder;

/// Turns raw grant records into the ordered digest.
///
/// The pipeline holds no state between calls; the same input list always
/// yields the same output.
///
/// # Example
///
/// ```
/// use grant_digest::digest::Pipeline;
/// use grant_digest::models::RawRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![RawRecord {
///     grant_date: Some("15.03.2023".to_string()),
///     purpose: Some("støtte til filmproduksjon".to_string()),
///     industry_description: Some("Filmproduksjon".to_string()),
///     granter_name: Some("NORSK FILMINSTITUTT".to_string()),
///     recipient_name: Some("EXAMPLE FILM AS".to_string()),
///     granted_amount: Some(Decimal::from(1500000)),
/// }];
///
/// let entries = Pipeline::default().render(records).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert!(entries[0].text.ends_with("Tildelingen skjer via Norsk Filminstitutt."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    sentence_builder: SentenceBuilder,
    limit: usize,
}

impl Pipeline {
    /// Creates a pipeline keeping at most `limit` entries.
    pub fn new(capitalizer: Capitalizer, amount_formatter: AmountFormatter, limit: usize) -> Self {
        Self {
            sentence_builder: SentenceBuilder::new(capitalizer, amount_formatter),
            limit,
        }
    }

    /// Returns the maximum number of entries rendered.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the sentence builder used for rendering.
    pub fn sentence_builder(&self) -> &SentenceBuilder {
        &self.sentence_builder
    }

    /// Renders the most recent records as sentences.
    ///
    /// Every date is normalized before anything is ranked, so one malformed
    /// or missing date anywhere in the input fails the whole call. Sentence
    /// fields are only checked on the records that survive ranking.
    ///
    /// # Errors
    ///
    /// [`crate::error::DigestError::MalformedDate`] or
    /// [`crate::error::DigestError::MissingField`]; no partial output is
    /// returned.
    pub fn render(&self, records: Vec<RawRecord>) -> DigestResult<Vec<RenderedEntry>> {
        let input_count = records.len();

        let normalized = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| normalize_record(record, index))
            .collect::<DigestResult<Vec<NormalizedRecord>>>()?;

        let ranked = rank_by_recency(normalized, self.limit);

        let entries = ranked
            .iter()
            .enumerate()
            .map(|(position, record)| self.sentence_builder.build(record, position))
            .collect::<DigestResult<Vec<RenderedEntry>>>()?;

        debug!(
            input_count,
            rendered_count = entries.len(),
            limit = self.limit,
            "Rendered grant digest"
        );

        Ok(entries)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            Capitalizer::default(),
            AmountFormatter::default(),
            DEFAULT_DIGEST_LIMIT,
        )
    }
}
