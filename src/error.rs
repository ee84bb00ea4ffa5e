//! Error types for the grant digest.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while fetching and rendering
//! grant records.

use thiserror::Error;

/// The main error type for the grant digest.
///
/// The pipeline has no partial-success mode: every failure is returned to
/// the caller as one of these variants.
///
/// # Example
///
/// ```
/// use grant_digest::error::DigestError;
///
/// let error = DigestError::MissingField {
///     field: "grantedAmount".to_string(),
///     position: 0,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Record at position 0 is missing field 'grantedAmount'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum DigestError {
    /// A grant date did not parse as `D.M.YYYY`.
    #[error("Malformed grant date '{value}': {reason}")]
    MalformedDate {
        /// The offending date string.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A record lacked one of the fields the digest consumes.
    #[error("Record at position {position} is missing field '{field}'")]
    MissingField {
        /// The logical name of the missing field (e.g. `grantedAmount`).
        field: String,
        /// Input index (for dates) or rank position (for sentence fields).
        position: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The registry could not be reached or answered with an error status.
    #[error("Failed to fetch grant records from '{url}': {message}")]
    FetchError {
        /// The URL or path that was being read.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// The registry answered, but not with a JSON array of records.
    #[error("Invalid grant record payload: {message}")]
    InvalidPayload {
        /// A description of the decode failure.
        message: String,
    },
}

/// A type alias for Results that return DigestError.
pub type DigestResult<T> = Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_displays_value_and_reason() {
        let error = DigestError::MalformedDate {
            value: "31-12-2023".to_string(),
            reason: "expected three '.'-separated components, found 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed grant date '31-12-2023': expected three '.'-separated components, found 1"
        );
    }

    #[test]
    fn test_missing_field_displays_field_and_position() {
        let error = DigestError::MissingField {
            field: "purpose".to_string(),
            position: 3,
        };
        assert_eq!(
            error.to_string(),
            "Record at position 3 is missing field 'purpose'"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = DigestError::ConfigNotFound {
            path: "/missing/digest.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/digest.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = DigestError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_fetch_error_displays_url_and_message() {
        let error = DigestError::FetchError {
            url: "https://example.invalid/search".to_string(),
            message: "status 503".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch grant records from 'https://example.invalid/search': status 503"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DigestError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_field() -> DigestResult<()> {
            Err(DigestError::MissingField {
                field: "grantDate".to_string(),
                position: 0,
            })
        }

        fn propagates_error() -> DigestResult<()> {
            returns_missing_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
