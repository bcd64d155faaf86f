//! Feed domain types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry in the crypto price feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoFeed {
    /// Provider coin identifier
    pub id: String,
    /// Ticker symbol (e.g., "BTC")
    pub name: String,
    /// Display name (e.g., "Bitcoin")
    pub full_name: String,
    /// Relative path of the coin icon
    pub image_url: String,
    /// Last price in the quote currency
    pub price: Decimal,
    /// Price change over the last 24 hours, in percent
    pub change_pct_24h: Decimal,
}

/// Domain error surfaced to callers of a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadCryptoFeedError {
    /// The remote could not be reached
    #[error("No connectivity")]
    Connectivity,
    /// The response could not be turned into feed items
    #[error("Invalid data")]
    InvalidData,
    /// The remote rejected the request
    #[error("Bad request")]
    BadRequest,
    /// The remote failed while serving the request
    #[error("Internal server error")]
    InternalServerError,
}

impl LoadCryptoFeedError {
    /// Stable label for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadCryptoFeedError::Connectivity => "connectivity",
            LoadCryptoFeedError::InvalidData => "invalid_data",
            LoadCryptoFeedError::BadRequest => "bad_request",
            LoadCryptoFeedError::InternalServerError => "internal_server_error",
        }
    }
}

/// Outcome of a single feed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCryptoFeedResult {
    /// Feed items in the order the remote returned them
    Success(Vec<CryptoFeed>),
    /// Classified failure
    Error(LoadCryptoFeedError),
}

impl LoadCryptoFeedResult {
    /// Label used for the outcome metric
    pub fn outcome(&self) -> &'static str {
        match self {
            LoadCryptoFeedResult::Success(_) => "success",
            LoadCryptoFeedResult::Error(e) => e.as_str(),
        }
    }
}
