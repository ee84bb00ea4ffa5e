//! HTTP API for the grant digest.
//!
//! This module serves the digest as an HTML page and as JSON, and renders
//! caller-supplied records on demand.

mod handlers;
mod page;
mod response;
mod state;

pub use handlers::create_router;
pub use page::{render_error_page, render_page};
pub use response::{ApiError, ApiErrorResponse, DigestMetadata, DigestResponse, ErrorOrigin};
pub use state::AppState;
