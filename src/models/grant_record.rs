//! Grant record models.
//!
//! The registry publishes its feed with Norwegian keys (`tildelingsdato`,
//! `tildeltBelop`, ...). [`RawRecord`] accepts those keys as well as their
//! English logical names, and leaves every field optional so that absence is
//! reported by the pipeline stage that consumes the field.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fields of a grant record consumed by the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// Date of the grant, `D.M.YYYY`.
    GrantDate,
    /// Free-text purpose of the grant.
    Purpose,
    /// Industry description of the recipient.
    IndustryDescription,
    /// Name of the granting body.
    GranterName,
    /// Name of the recipient.
    RecipientName,
    /// Granted amount in the currency's base unit.
    GrantedAmount,
}

impl RecordField {
    /// The logical (English) name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            RecordField::GrantDate => "grantDate",
            RecordField::Purpose => "purpose",
            RecordField::IndustryDescription => "industryDescription",
            RecordField::GranterName => "granterName",
            RecordField::RecipientName => "recipientName",
            RecordField::GrantedAmount => "grantedAmount",
        }
    }

    /// The key used by the registry feed.
    pub fn registry_key(self) -> &'static str {
        match self {
            RecordField::GrantDate => "tildelingsdato",
            RecordField::Purpose => "formaal",
            RecordField::IndustryDescription => "naeringBeskrivelse",
            RecordField::GranterName => "stottegiverNavn",
            RecordField::RecipientName => "stottemottakerNavn",
            RecordField::GrantedAmount => "tildeltBelop",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A grant record as decoded from the registry.
///
/// Only the fields the digest consumes are kept; other keys in the feed are
/// ignored on decode.
///
/// # Example
///
/// ```
/// use grant_digest::models::RawRecord;
///
/// let record: RawRecord = serde_json::from_str(r#"{
///     "tildelingsdato": "15.03.2023",
///     "formaal": "Støtte til filmproduksjon",
///     "naeringBeskrivelse": "Filmproduksjon",
///     "stottegiverNavn": "NORSK FILMINSTITUTT",
///     "stottemottakerNavn": "EXAMPLE FILM AS",
///     "tildeltBelop": 1500000
/// }"#).unwrap();
/// assert_eq!(record.grant_date.as_deref(), Some("15.03.2023"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Grant date as published, `D.M.YYYY`.
    #[serde(rename = "tildelingsdato", alias = "grantDate", default)]
    pub grant_date: Option<String>,
    /// Purpose of the grant.
    #[serde(rename = "formaal", alias = "purpose", default)]
    pub purpose: Option<String>,
    /// Industry description of the recipient.
    #[serde(
        rename = "naeringBeskrivelse",
        alias = "industryDescription",
        default
    )]
    pub industry_description: Option<String>,
    /// Name of the granting body, often all uppercase.
    #[serde(rename = "stottegiverNavn", alias = "granterName", default)]
    pub granter_name: Option<String>,
    /// Name of the recipient, often all uppercase.
    #[serde(rename = "stottemottakerNavn", alias = "recipientName", default)]
    pub recipient_name: Option<String>,
    /// Granted amount in the currency's base unit.
    #[serde(rename = "tildeltBelop", alias = "grantedAmount", default)]
    pub granted_amount: Option<Decimal>,
}

/// A raw record together with its parsed grant date.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// The record exactly as received.
    pub record: RawRecord,
    /// The parsed grant date used for ordering.
    pub grant_date_value: NaiveDate,
}
