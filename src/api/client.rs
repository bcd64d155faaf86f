//! CryptoCompare HTTP client
//!
//! Fetches the top coins by total volume. Every reqwest failure and every
//! non-success status is classified into an `HttpClientError` kind so callers
//! never see raw transport errors.

use super::{HttpClient, HttpClientError};
use crate::telemetry::{record_latency, LatencyMetric};
use futures_util::stream::{self, BoxStream, StreamExt};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

/// CryptoCompare API base URL
pub const CRYPTOCOMPARE_API_URL: &str = "https://min-api.cryptocompare.com";

/// Top list endpoint path
const TOP_LIST_PATH: &str = "/data/top/totalvolfull";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Number of coins to request
    pub limit: u32,
    /// Quote currency symbol
    pub currency: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: CRYPTOCOMPARE_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            limit: 20,
            currency: "USD".to_string(),
        }
    }
}

/// reqwest-backed `HttpClient`
pub struct ReqwestHttpClient {
    config: ApiClientConfig,
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a new client with default configuration
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(ApiClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ApiClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }

    /// Full URL of the top list endpoint
    fn feed_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            TOP_LIST_PATH
        )
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.config.limit.to_string()),
            ("tsym", self.config.currency.clone()),
        ]
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self) -> BoxStream<'static, Result<String, HttpClientError>> {
        // The request is only sent once the stream is polled; dropping the
        // stream drops the in-flight request.
        stream::once(fetch(self.client.clone(), self.feed_url(), self.query())).boxed()
    }
}

async fn fetch(
    client: Client,
    url: String,
    query: Vec<(&'static str, String)>,
) -> Result<String, HttpClientError> {
    tracing::debug!(url = %url, "Fetching crypto feed");

    let started = Instant::now();
    let response = client
        .get(&url)
        .query(&query)
        .send()
        .await
        .map_err(|e| {
            let kind = classify_send_error(&e);
            tracing::warn!(error = %e, kind = ?kind, "Crypto feed request failed");
            kind
        })?;
    record_latency(LatencyMetric::HttpRequest, started.elapsed());

    let status = response.status();
    if let Some(kind) = classify_status(status) {
        tracing::warn!(status = %status, kind = ?kind, "Crypto feed request rejected");
        return Err(kind);
    }

    response.text().await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to read crypto feed body");
        HttpClientError::InvalidData
    })
}

/// Classify a failure to obtain a response
fn classify_send_error(error: &reqwest::Error) -> HttpClientError {
    if error.is_builder() {
        HttpClientError::BadRequest
    } else {
        HttpClientError::Connectivity
    }
}

/// Classify a response status, `None` for success
fn classify_status(status: StatusCode) -> Option<HttpClientError> {
    if status.is_success() {
        None
    } else if status.is_client_error() {
        Some(HttpClientError::BadRequest)
    } else if status.is_server_error() {
        Some(HttpClientError::InternalServerError)
    } else {
        Some(HttpClientError::InvalidData)
    }
}
