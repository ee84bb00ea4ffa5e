//! Sentence construction for ranked grant records.
//!
//! Each surviving record becomes one entry of the form
//!
//! ```text
//! 1: Example Film AS, filmproduksjon, er tildelt 1 500 000 kroner som støtte til filmproduksjon. Tildelingen skjer via Norsk Filminstitutt.
//! ```

use rust_decimal::Decimal;

use crate::error::{DigestError, DigestResult};
use crate::models::{NormalizedRecord, RecordField, RenderedEntry};

use super::amount_format::AmountFormatter;
use super::capitalizer::Capitalizer;

/// Lowercases only the first character of `text`.
///
/// Used for purpose and industry phrases, which often carry acronyms further
/// in (`støtte til SMB-er`) that full capitalization would mangle.
///
/// # Example
///
/// ```
/// use grant_digest::digest::lowercase_first;
///
/// assert_eq!(lowercase_first("Støtte til SMB-er"), "støtte til SMB-er");
/// assert_eq!(lowercase_first(""), "");
/// ```
pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds rendered entries from normalized records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceBuilder {
    capitalizer: Capitalizer,
    amount_formatter: AmountFormatter,
}

impl SentenceBuilder {
    /// Creates a sentence builder from its name and amount formatters.
    pub fn new(capitalizer: Capitalizer, amount_formatter: AmountFormatter) -> Self {
        Self {
            capitalizer,
            amount_formatter,
        }
    }

    /// Returns the capitalizer used for granter and recipient names.
    pub fn capitalizer(&self) -> &Capitalizer {
        &self.capitalizer
    }

    /// Returns the amount formatter.
    pub fn amount_formatter(&self) -> &AmountFormatter {
        &self.amount_formatter
    }

    /// Renders the record at 0-based rank `position`.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::MissingField`] if the record lacks its purpose,
    /// industry description, granter, recipient or amount. No partial
    /// sentence is produced.
    ///
    /// # Example
    ///
    /// ```
    /// use grant_digest::digest::{SentenceBuilder, normalize_record};
    /// use grant_digest::models::RawRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let raw = RawRecord {
    ///     grant_date: Some("15.03.2023".to_string()),
    ///     purpose: Some("støtte til filmproduksjon".to_string()),
    ///     industry_description: Some("Filmproduksjon".to_string()),
    ///     granter_name: Some("NORSK FILMINSTITUTT".to_string()),
    ///     recipient_name: Some("EXAMPLE FILM AS".to_string()),
    ///     granted_amount: Some(Decimal::from(1500000)),
    /// };
    /// let record = normalize_record(raw, 0).unwrap();
    ///
    /// let entry = SentenceBuilder::default().build(&record, 0).unwrap();
    /// assert_eq!(entry.sequence, 1);
    /// assert!(entry.text.starts_with("1: Example Film AS, filmproduksjon, er tildelt"));
    /// ```
    pub fn build(&self, record: &NormalizedRecord, position: usize) -> DigestResult<RenderedEntry> {
        let raw = &record.record;
        let purpose = required(raw.purpose.as_ref(), RecordField::Purpose, position)?;
        let industry = required(
            raw.industry_description.as_ref(),
            RecordField::IndustryDescription,
            position,
        )?;
        let granter = required(raw.granter_name.as_ref(), RecordField::GranterName, position)?;
        let recipient = required(
            raw.recipient_name.as_ref(),
            RecordField::RecipientName,
            position,
        )?;
        let amount: &Decimal = required(
            raw.granted_amount.as_ref(),
            RecordField::GrantedAmount,
            position,
        )?;

        let sequence = position + 1;
        let text = format!(
            "{}: {}, {}, er tildelt {} som {}. Tildelingen skjer via {}.",
            sequence,
            self.capitalizer.capitalize(recipient),
            lowercase_first(industry),
            self.amount_formatter.format(*amount),
            lowercase_first(purpose),
            self.capitalizer.capitalize(granter),
        );

        Ok(RenderedEntry { sequence, text })
    }
}

fn required<T>(value: Option<&T>, field: RecordField, position: usize) -> DigestResult<&T>
where
    T: ?Sized,
{
    value.ok_or_else(|| DigestError::MissingField {
        field: field.name().to_string(),
        position,
    })
}
