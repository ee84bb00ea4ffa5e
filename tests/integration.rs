//! Integration tests for the grant digest.
//!
//! This test suite covers:
//! - The documented pipeline scenarios (single record, top ten, failures)
//! - The JSON render endpoint with request-supplied records
//! - The digest and page endpoints backed by a static source
//! - Error mapping for bad records, bad JSON and failing sources
//! - Loading the bundled configuration

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use tower::ServiceExt;

use grant_digest::api::{create_router, ApiError, AppState, DigestResponse};
use grant_digest::config::ConfigLoader;
use grant_digest::digest::Pipeline;
use grant_digest::error::{DigestError, DigestResult};
use grant_digest::models::RawRecord;
use grant_digest::source::{RecordSource, StaticSource};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_request_record(
    date: &str,
    recipient: &str,
    granter: &str,
    amount: i64,
) -> Value {
    json!({
        "tildelingsdato": date,
        "formaal": "Støtte til filmproduksjon",
        "naeringBeskrivelse": "Filmproduksjon",
        "stottegiverNavn": granter,
        "stottemottakerNavn": recipient,
        "tildeltBelop": amount
    })
}

fn film_record() -> Value {
    json!({
        "grantDate": "15.03.2023",
        "purpose": "støtte til filmproduksjon",
        "industryDescription": "Filmproduksjon",
        "granterName": "NORSK FILMINSTITUTT",
        "recipientName": "EXAMPLE FILM AS",
        "grantedAmount": 1500000
    })
}

fn date_string(offset: i64) -> String {
    (NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + Duration::days(offset))
        .format("%d.%m.%Y")
        .to_string()
}

fn raw(value: Value) -> RawRecord {
    serde_json::from_value(value).unwrap()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn router_with_records(records: Vec<RawRecord>) -> Router {
    create_router(AppState::new(
        ConfigLoader::default(),
        Arc::new(StaticSource::new(records)),
    ))
}

async fn post_render(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/render")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}

struct FailingSource;

#[async_trait]
impl RecordSource for FailingSource {
    async fn fetch(&self) -> DigestResult<Vec<RawRecord>> {
        Err(DigestError::FetchError {
            url: "https://registry.invalid/search".to_string(),
            message: "connection refused".to_string(),
        })
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

// =============================================================================
// Pipeline scenarios
// =============================================================================

#[test]
fn test_single_film_record_scenario() {
    let entries = Pipeline::default().render(vec![raw(film_record())]).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].sequence, 1);
    assert_eq!(
        normalize_whitespace(&entries[0].text),
        "1: Example Film AS, filmproduksjon, er tildelt 1 500 000 kroner som støtte til \
         filmproduksjon. Tildelingen skjer via Norsk Filminstitutt."
    );
}

#[test]
fn test_fifteen_distinct_dates_keep_ten_most_recent() {
    // Shuffled input order: offsets are not monotonic
    let offsets: [i64; 15] = [40, 3, 77, 12, 58, 0, 91, 25, 66, 8, 33, 84, 19, 50, 71];
    let records: Vec<RawRecord> = offsets
        .iter()
        .map(|offset| {
            raw(create_request_record(
                &date_string(*offset),
                &format!("FIRMA {} AS", offset),
                "INNOVASJON NORGE",
                1000,
            ))
        })
        .collect();

    let entries = Pipeline::default().render(records).unwrap();
    assert_eq!(entries.len(), 10);

    let mut expected: Vec<i64> = offsets.to_vec();
    expected.sort_by(|a, b| b.cmp(a));
    for (position, (entry, offset)) in entries.iter().zip(expected.iter()).enumerate() {
        assert_eq!(entry.sequence, position + 1);
        assert!(
            entry
                .text
                .starts_with(&format!("{}: Firma {} AS,", position + 1, offset)),
            "unexpected entry at {}: {}",
            position,
            entry.text
        );
    }
}

#[test]
fn test_missing_amount_scenario() {
    let mut record = film_record();
    record.as_object_mut().unwrap().remove("grantedAmount");

    match Pipeline::default().render(vec![raw(record)]) {
        Err(DigestError::MissingField { field, .. }) => assert_eq!(field, "grantedAmount"),
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_wrong_separator_scenario() {
    let mut record = film_record();
    record["grantDate"] = json!("31-12-2023");

    assert!(matches!(
        Pipeline::default().render(vec![raw(record)]),
        Err(DigestError::MalformedDate { .. })
    ));
}

#[test]
fn test_pipeline_can_be_called_repeatedly() {
    let pipeline = Pipeline::default();
    for _ in 0..3 {
        let entries = pipeline.render(vec![raw(film_record())]).unwrap();
        assert_eq!(entries.len(), 1);
    }
}

// =============================================================================
// POST /api/render
// =============================================================================

#[tokio::test]
async fn test_render_single_record() {
    let (status, body) = post_render(router_with_records(vec![]), json!([film_record()])).await;

    assert_eq!(status, StatusCode::OK);
    let response: DigestResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.entries.len(), 1);
    assert_eq!(response.entries[0].sequence, 1);
    assert!(response.entries[0].text.contains("Example Film AS"));
    assert!(response.entries[0].text.contains("Norsk Filminstitutt"));
    assert_eq!(response.metadata.records_considered, 1);
}

#[tokio::test]
async fn test_render_preserves_ties_in_input_order() {
    let body = json!([
        create_request_record("1.6.2023", "TIDLIG AS", "NAV", 1),
        create_request_record("2.6.2023", "FØRST AS", "NAV", 2),
        create_request_record("2.6.2023", "ANDRE AS", "NAV", 3),
    ]);

    let (status, body) = post_render(router_with_records(vec![]), body).await;
    assert_eq!(status, StatusCode::OK);

    let response: DigestResponse = serde_json::from_value(body).unwrap();
    let texts: Vec<&str> = response.entries.iter().map(|e| e.text.as_str()).collect();
    assert!(texts[0].starts_with("1: Først AS,"));
    assert!(texts[1].starts_with("2: Andre AS,"));
    assert!(texts[2].starts_with("3: Tidlig AS,"));
}

#[tokio::test]
async fn test_render_missing_field_is_unprocessable() {
    let mut record = film_record();
    record.as_object_mut().unwrap().remove("recipientName");

    let (status, body) = post_render(router_with_records(vec![]), json!([record])).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let error: ApiError = serde_json::from_value(body).unwrap();
    assert_eq!(error.code, "MISSING_FIELD");
    assert!(error.message.contains("recipientName"));
}

#[tokio::test]
async fn test_render_malformed_date_is_unprocessable() {
    let body = json!([
        film_record(),
        create_request_record("2023.12.31", "FEIL AS", "NAV", 1),
    ]);

    let (status, body) = post_render(router_with_records(vec![]), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let error: ApiError = serde_json::from_value(body).unwrap();
    assert_eq!(error.code, "MALFORMED_DATE");
}

#[tokio::test]
async fn test_render_invalid_json_is_bad_request() {
    let router = router_with_records(vec![]);
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/render")
                .header("Content-Type", "application/json")
                .body(Body::from("[{"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "MALFORMED_JSON");
}

#[tokio::test]
async fn test_render_object_instead_of_array_is_bad_request() {
    let (status, body) = post_render(router_with_records(vec![]), film_record()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: ApiError = serde_json::from_value(body).unwrap();
    assert_eq!(error.code, "MALFORMED_JSON");
}

// =============================================================================
// GET /api/digest and GET /
// =============================================================================

#[tokio::test]
async fn test_digest_from_source() {
    let records: Vec<RawRecord> = (0..12)
        .map(|i| {
            raw(create_request_record(
                &date_string(i),
                &format!("FIRMA {} AS", i),
                "NORGES FORSKNINGSRÅD",
                i * 1000,
            ))
        })
        .collect();

    let (status, body) = get(router_with_records(records), "/api/digest").await;
    assert_eq!(status, StatusCode::OK);

    let response: DigestResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.entries.len(), 10);
    assert_eq!(response.metadata.records_considered, 12);
    assert_eq!(response.metadata.entries_rendered, 10);
    assert!(response.entries[0].text.starts_with("1: Firma 11 AS,"));
    assert!(response.entries[0].text.contains("11\u{a0}000 kroner"));
    assert!(response.entries[0].text.ends_with("via Norges Forskningsråd."));
}

#[tokio::test]
async fn test_digest_with_bad_upstream_record_is_bad_gateway() {
    let mut record = film_record();
    record["grantDate"] = json!("31-12-2023");

    let (status, body) = get(router_with_records(vec![raw(record)]), "/api/digest").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "MALFORMED_DATE");
}

#[tokio::test]
async fn test_failing_source_is_bad_gateway() {
    let router = create_router(AppState::new(
        ConfigLoader::default(),
        Arc::new(FailingSource),
    ));

    let (status, body) = get(router, "/api/digest").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "FETCH_ERROR");
    assert_eq!(error.details.as_deref(), Some("connection refused"));
}

#[tokio::test]
async fn test_page_lists_entries() {
    let (status, body) = get(router_with_records(vec![raw(film_record())]), "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<p>1: Example Film AS, filmproduksjon,"));
    assert!(html.contains("Tildelingen skjer via Norsk Filminstitutt."));
}

#[tokio::test]
async fn test_page_escapes_record_markup() {
    let record = create_request_record("1.1.2024", "<B>FETT</B> AS", "NAV", 1);

    let (status, body) = get(router_with_records(vec![raw(record)]), "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("&lt;b&gt;fett&lt;/b&gt; AS"));
    assert!(!html.contains("<b>"));
}

#[tokio::test]
async fn test_page_shows_error_on_failing_source() {
    let router = create_router(AppState::new(
        ConfigLoader::default(),
        Arc::new(FailingSource),
    ));

    let (status, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("connection refused"));
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test]
async fn test_bundled_config_limit_applies_to_endpoints() {
    let yaml = std::fs::read_to_string("./config/digest.yaml")
        .unwrap()
        .replace("limit: 10", "limit: 3");
    let config = ConfigLoader::from_yaml(&yaml).unwrap();

    let records: Vec<RawRecord> = (0..5)
        .map(|i| {
            raw(create_request_record(
                &date_string(i),
                "FIRMA AS",
                "NAV",
                1,
            ))
        })
        .collect();
    let router = create_router(AppState::new(config, Arc::new(StaticSource::new(records))));

    let (status, body) = get(router, "/api/digest").await;
    assert_eq!(status, StatusCode::OK);

    let response: DigestResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.entries.len(), 3);
}
