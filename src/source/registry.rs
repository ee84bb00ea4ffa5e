//! HTTPS client for the public support registry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use http::header::ACCEPT;
use http::{Request, Uri};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::{info, warn};

use crate::config::RegistryConfig;
use crate::error::{DigestError, DigestResult};
use crate::models::RawRecord;

use super::{RecordSource, decode_records};

type HttpsClient = Client<HttpsConnector<HttpConnector>, String>;

/// Fetches the full grant list from the registry's search endpoint.
///
/// The registry can filter by date, but the ten most recent grants may lie
/// in any window, so the whole result is fetched and ranked locally.
#[derive(Clone)]
pub struct RegistryClient {
    url: Uri,
    timeout: Duration,
    max_body_bytes: usize,
    client: HttpsClient,
}

impl RegistryClient {
    /// Creates a client for the configured registry URL.
    ///
    /// TLS uses the platform's native root certificates.
    ///
    /// # Errors
    ///
    /// [`DigestError::FetchError`] if the URL does not parse or no usable
    /// root certificates are found.
    pub fn new(config: &RegistryConfig) -> DigestResult<Self> {
        let fetch_error = |message: String| DigestError::FetchError {
            url: config.url.clone(),
            message,
        };

        let url: Uri = config
            .url
            .parse()
            .map_err(|e: http::uri::InvalidUri| fetch_error(e.to_string()))?;

        let mut root_store = rustls::RootCertStore::empty();
        let native = rustls_native_certs::load_native_certs();
        root_store.add_parsable_certificates(native.certs);
        if root_store.is_empty() {
            return Err(fetch_error("No valid system certificates found".to_string()));
        }

        let tls_config = rustls::ClientConfig::builder_with_provider(Arc::new(
            rustls::crypto::ring::default_provider(),
        ))
        .with_safe_default_protocol_versions()
        .map_err(|e| fetch_error(e.to_string()))?
        .with_root_certificates(root_store)
        .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        Ok(Self {
            url,
            timeout: Duration::from_secs(config.timeout_secs),
            max_body_bytes: config.max_body_bytes,
            client: Client::builder(TokioExecutor::new()).build(https_connector),
        })
    }

    fn fetch_error(&self, message: impl Into<String>) -> DigestError {
        DigestError::FetchError {
            url: self.url.to_string(),
            message: message.into(),
        }
    }

    async fn fetch_body(&self) -> DigestResult<Bytes> {
        let request = Request::get(self.url.clone())
            .header(ACCEPT, "application/json")
            .body(String::new())
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = %status, "Registry returned an error status");
            return Err(self.fetch_error(format!("registry answered {}", status)));
        }

        axum::body::to_bytes(Body::new(response.into_body()), self.max_body_bytes)
            .await
            .map_err(|e| self.fetch_error(format!("failed to read response body: {}", e)))
    }
}

#[async_trait]
impl RecordSource for RegistryClient {
    async fn fetch(&self) -> DigestResult<Vec<RawRecord>> {
        let body = tokio::time::timeout(self.timeout, self.fetch_body())
            .await
            .map_err(|_| {
                self.fetch_error(format!("timed out after {}s", self.timeout.as_secs()))
            })??;

        let records = decode_records(&body)?;
        info!(
            url = %self.url,
            bytes = body.len(),
            records = records.len(),
            "Fetched grant records from registry"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("registry {}", self.url)
    }
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish_non_exhaustive()
    }
}
