//! Configuration types for crypto-feed

use crate::api::{ApiClientConfig, CRYPTOCOMPARE_API_URL};
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Remote feed API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the CryptoCompare API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of coins to load
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Quote currency symbol
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_base_url() -> String {
    CRYPTOCOMPARE_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_limit() -> u32 {
    20
}
fn default_currency() -> String {
    "USD".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            limit: default_limit(),
            currency: default_currency(),
        }
    }
}

impl ApiConfig {
    /// Settings for the HTTP client
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            limit: self.limit,
            currency: self.currency.clone(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Prometheus exporter port, disabled when absent
    pub metrics_port: Option<u16>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: None,
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
