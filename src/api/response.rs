//! Response types for the grant digest API.
//!
//! This module defines the digest response body, the error response
//! structures and the mapping from [`DigestError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DigestError;
use crate::models::RenderedEntry;

/// Body returned by the JSON digest endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestResponse {
    /// The rendered entries, most recent first.
    pub entries: Vec<RenderedEntry>,
    /// Information about how the digest was produced.
    pub metadata: DigestMetadata,
}

/// Metadata about a digest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestMetadata {
    /// Identifier logged with every line of this request.
    pub correlation_id: Uuid,
    /// Where the records came from.
    pub source: String,
    /// Number of records ranked.
    pub records_considered: usize,
    /// Number of entries rendered.
    pub entries_rendered: usize,
    /// Time spent fetching and rendering, in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Where the records behind an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// Records were supplied in the request body.
    Request,
    /// Records were fetched from the configured source.
    Upstream,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Maps a digest error to a response.
    ///
    /// Bad records are the client's fault when it sent them
    /// (`422 Unprocessable Entity`) and the registry's fault when they were
    /// fetched (`502 Bad Gateway`).
    pub fn new(error: DigestError, origin: ErrorOrigin) -> Self {
        let input_status = match origin {
            ErrorOrigin::Request => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorOrigin::Upstream => StatusCode::BAD_GATEWAY,
        };

        match error {
            DigestError::MalformedDate { value, reason } => ApiErrorResponse {
                status: input_status,
                error: ApiError::with_details(
                    "MALFORMED_DATE",
                    format!("Malformed grant date '{}'", value),
                    reason,
                ),
            },
            DigestError::MissingField { field, position } => ApiErrorResponse {
                status: input_status,
                error: ApiError::with_details(
                    "MISSING_FIELD",
                    format!("missing field: {}", field),
                    format!("The record at position {} has no '{}'", position, field),
                ),
            },
            DigestError::InvalidPayload { message } => ApiErrorResponse {
                status: input_status,
                error: ApiError::with_details(
                    "INVALID_PAYLOAD",
                    "Grant records could not be decoded",
                    message,
                ),
            },
            DigestError::FetchError { url, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "FETCH_ERROR",
                    format!("Failed to fetch grant records from {}", url),
                    message,
                ),
            },
            DigestError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            DigestError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DigestError> for ApiErrorResponse {
    fn from(error: DigestError) -> Self {
        Self::new(error, ErrorOrigin::Request)
    }
}
