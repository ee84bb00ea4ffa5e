//! Grant date normalization.
//!
//! The registry publishes dates day-first with dot separators (`15.03.2023`,
//! `1.2.2024`). This module turns them into [`NaiveDate`] values so records
//! can be ordered by recency.

use chrono::NaiveDate;

use crate::error::{DigestError, DigestResult};
use crate::models::{NormalizedRecord, RawRecord, RecordField};

/// Parses a `D.M.YYYY` (or `DD.MM.YYYY`) grant date.
///
/// The string is split into day, month and year; the components are then
/// handed to the date constructor in year, month, day order. Day and month
/// take one or two digits, the year exactly four.
///
/// # Errors
///
/// Returns [`DigestError::MalformedDate`] if the string does not have three
/// numeric components of the expected width, or if they do not name a real
/// calendar date.
///
/// # Example
///
/// ```
/// use grant_digest::digest::parse_grant_date;
/// use chrono::NaiveDate;
///
/// let date = parse_grant_date("15.03.2023").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
///
/// assert!(parse_grant_date("31-12-2023").is_err());
/// ```
pub fn parse_grant_date(value: &str) -> DigestResult<NaiveDate> {
    let malformed = |reason: String| DigestError::MalformedDate {
        value: value.to_string(),
        reason,
    };

    let parts: Vec<&str> = value.trim().split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(malformed(format!(
            "expected three '.'-separated components, found {}",
            parts.len()
        )));
    };

    let day = parse_component(day, 1..=2, "day").map_err(&malformed)?;
    let month = parse_component(month, 1..=2, "month").map_err(&malformed)?;
    let year = parse_component(year, 4..=4, "year").map_err(&malformed)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| malformed("not a valid calendar date".to_string()))
}

/// Parses one all-digit date component whose width lies in `width`.
fn parse_component(
    component: &str,
    width: std::ops::RangeInclusive<usize>,
    name: &str,
) -> Result<u32, String> {
    if !width.contains(&component.len()) || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "{} component '{}' must be {} digits",
            name,
            component,
            if width.start() == width.end() {
                width.start().to_string()
            } else {
                format!("{}-{}", width.start(), width.end())
            }
        ));
    }
    component
        .parse()
        .map_err(|_| format!("{} component '{}' is not a number", name, component))
}

/// Attaches the parsed grant date to a record.
///
/// `index` is the record's position in the input list and is reported if
/// the date is missing.
///
/// # Errors
///
/// [`DigestError::MissingField`] when the record has no grant date, or
/// [`DigestError::MalformedDate`] when it does not parse.
pub fn normalize_record(record: RawRecord, index: usize) -> DigestResult<NormalizedRecord> {
    let grant_date_value = match record.grant_date.as_deref() {
        Some(value) => parse_grant_date(value)?,
        None => {
            return Err(DigestError::MissingField {
                field: RecordField::GrantDate.name().to_string(),
                position: index,
            });
        }
    };

    Ok(NormalizedRecord {
        record,
        grant_date_value,
    })
}
