//! Recency ranking of normalized records.

use crate::models::NormalizedRecord;

/// Number of records kept in a digest.
pub const DEFAULT_DIGEST_LIMIT: usize = 10;

/// Orders records most recent first and keeps at most `limit` of them.
///
/// The sort is stable: records sharing a grant date keep their input order.
/// Every record is traversed before truncation, and short inputs are
/// returned whole.
///
/// # Example
///
/// ```
/// use grant_digest::digest::{normalize_record, rank_by_recency};
/// use grant_digest::models::RawRecord;
///
/// let records = ["1.1.2023", "3.1.2023", "2.1.2023"]
///     .iter()
///     .enumerate()
///     .map(|(i, date)| {
///         let raw = RawRecord { grant_date: Some(date.to_string()), ..Default::default() };
///         normalize_record(raw, i).unwrap()
///     })
///     .collect();
///
/// let ranked = rank_by_recency(records, 2);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].record.grant_date.as_deref(), Some("3.1.2023"));
/// assert_eq!(ranked[1].record.grant_date.as_deref(), Some("2.1.2023"));
/// ```
pub fn rank_by_recency(mut records: Vec<NormalizedRecord>, limit: usize) -> Vec<NormalizedRecord> {
    records.sort_by(|a, b| b.grant_date_value.cmp(&a.grant_date_value));
    records.truncate(limit);
    records
}
