//! Remote feed loading
//!
//! HTTP client contract, the reqwest-backed client, the payload parser and
//! the remote load use case

mod client;
mod parser;
mod use_case;

pub use client::{ApiClientConfig, ReqwestHttpClient, CRYPTOCOMPARE_API_URL};
pub use parser::{parse_crypto_feed, ParseError};
pub use use_case::LoadCryptoFeedRemoteUseCase;

use crate::domain::LoadCryptoFeedError;
use futures_util::stream::BoxStream;
use thiserror::Error;

/// Reason a request could not be satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// Connection, timeout or send failure
    #[error("Connectivity failure")]
    Connectivity,
    /// Response body missing, unreadable or unexpected
    #[error("Invalid response data")]
    InvalidData,
    /// 4xx response
    #[error("Bad request")]
    BadRequest,
    /// 5xx response
    #[error("Internal server error")]
    InternalServerError,
}

impl From<HttpClientError> for LoadCryptoFeedError {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::Connectivity => LoadCryptoFeedError::Connectivity,
            HttpClientError::InvalidData => LoadCryptoFeedError::InvalidData,
            HttpClientError::BadRequest => LoadCryptoFeedError::BadRequest,
            HttpClientError::InternalServerError => LoadCryptoFeedError::InternalServerError,
        }
    }
}

/// Trait for HTTP client implementations
pub trait HttpClient: Send + Sync {
    /// Fetch the raw feed payload
    ///
    /// The stream emits at most one item, either the response body or the
    /// failure kind, and then completes.
    fn get(&self) -> BoxStream<'static, Result<String, HttpClientError>>;
}
