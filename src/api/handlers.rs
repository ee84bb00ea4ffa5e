//! HTTP request handlers for the grant digest API.
//!
//! This module contains the handler functions for all endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::DigestResult;
use crate::models::{RawRecord, RenderedEntry};

use super::page::{render_error_page, render_page};
use super::response::{ApiError, ApiErrorResponse, DigestMetadata, DigestResponse, ErrorOrigin};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/digest", get(digest_handler))
        .route("/api/render", post(render_handler))
        .with_state(state)
}

/// Outcome of one pipeline run.
struct DigestRun {
    entries: Vec<RenderedEntry>,
    records_considered: usize,
}

/// Fetches from the configured source and renders the digest.
async fn fetch_and_render(state: &AppState, correlation_id: Uuid) -> DigestResult<DigestRun> {
    let records = state.source().fetch().await?;
    render_records(state, correlation_id, records)
}

fn render_records(
    state: &AppState,
    correlation_id: Uuid,
    records: Vec<RawRecord>,
) -> DigestResult<DigestRun> {
    let records_considered = records.len();
    let entries = state.pipeline().render(records)?;
    info!(
        correlation_id = %correlation_id,
        records_considered,
        entries_rendered = entries.len(),
        "Digest rendered"
    );
    Ok(DigestRun {
        entries,
        records_considered,
    })
}

fn digest_response(
    run: DigestRun,
    correlation_id: Uuid,
    source: String,
    started: Instant,
) -> Response {
    let entries_rendered = run.entries.len();
    let body = DigestResponse {
        entries: run.entries,
        metadata: DigestMetadata {
            correlation_id,
            source,
            records_considered: run.records_considered,
            entries_rendered,
            duration_us: started.elapsed().as_micros() as u64,
        },
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for GET /.
///
/// Fetches the records and returns the digest as an HTML page.
async fn page_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        source = %state.source().describe(),
        "Rendering digest page"
    );

    match fetch_and_render(&state, correlation_id).await {
        Ok(run) => Html(render_page(&run.entries)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Digest page failed");
            let message = err.to_string();
            let api_error = ApiErrorResponse::new(err, ErrorOrigin::Upstream);
            (api_error.status, Html(render_error_page(&message))).into_response()
        }
    }
}

/// Handler for GET /api/digest.
///
/// Fetches the records and returns the digest as JSON.
async fn digest_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let source = state.source().describe();
    info!(correlation_id = %correlation_id, source = %source, "Processing digest request");

    let started = Instant::now();
    match fetch_and_render(&state, correlation_id).await {
        Ok(run) => digest_response(run, correlation_id, source, started),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Digest request failed");
            error_response(ApiErrorResponse::new(err, ErrorOrigin::Upstream))
        }
    }
}

/// Handler for POST /api/render.
///
/// Renders the JSON array of records in the request body.
async fn render_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<RawRecord>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing render request");

    let records = match payload {
        Ok(Json(records)) => records,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            });
        }
    };

    let started = Instant::now();
    match render_records(&state, correlation_id, records) {
        Ok(run) => digest_response(run, correlation_id, "request".to_string(), started),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Render request failed");
            error_response(ApiErrorResponse::new(err, ErrorOrigin::Request))
        }
    }
}
