//! HTTP client for registry endpoints
//!
//! [`RegistryClient`] issues plain GET requests against a registry base URL.
//! It performs no retries and does not check status codes; a non-2xx body
//! surfaces as a decode failure in whichever step consumes it.

use apb_registry_core::{RegistryError, Result};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::RegistryConfig;

/// Media type requested for manifest fetches
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Prefix a URL with `http://` unless it already carries an HTTP(S) scheme
///
/// Applying this twice is a no-op.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Build the shared HTTP client for a registry configuration
pub fn build_http_client(config: &RegistryConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());

    if config.timeout_seconds > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
    }

    builder
        .build()
        .map_err(|e| RegistryError::ConfigurationError(format!("Failed to build HTTP client: {}", e)))
}

/// GET-only client bound to one registry base URL
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client with its own HTTP client built from `config`
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let http = build_http_client(config)?;
        Ok(Self::with_http_client(http, &config.url))
    }

    /// Create a client around an existing HTTP client
    ///
    /// `reqwest::Client` is reference counted, so one instance can be shared
    /// by every registry client in the process.
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_url(base_url.trim_end_matches('/')),
        }
    }

    /// Normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path (and query) against the base URL
    ///
    /// The path is appended verbatim; no percent-encoding is applied beyond
    /// what URL parsing itself requires.
    pub fn endpoint(&self, path_and_query: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path_and_query))?)
    }

    /// GET a path and read the whole body
    pub async fn get_bytes(&self, path_and_query: &str, accept_json: bool) -> Result<Vec<u8>> {
        let url = self.endpoint(path_and_query)?;
        debug!(url = %url, "GET");

        let mut request = self.http.get(url);
        if accept_json {
            request = request.header(ACCEPT, JSON_MEDIA_TYPE);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RegistryError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RegistryError::Http(format!("Failed to read response body: {}", e)))?;

        debug!(status = %status, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }

    /// GET a path and decode the body as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let body = self.get_bytes(path_and_query, false).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
