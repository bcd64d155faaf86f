//! Remote feed load use case

use super::{parse_crypto_feed, HttpClient, HttpClientError};
use crate::domain::{LoadCryptoFeedError, LoadCryptoFeedResult, LoadCryptoFeedUseCase};
use crate::telemetry::record_load_outcome;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;

/// Loads the feed through an `HttpClient` and classifies its failures
pub struct LoadCryptoFeedRemoteUseCase {
    client: Arc<dyn HttpClient>,
    /// Quote currency the client requests prices in
    currency: Arc<str>,
}

impl LoadCryptoFeedRemoteUseCase {
    /// Create a use case over the given client
    ///
    /// `currency` must match the quote currency the client requests. No
    /// request is made until a stream returned by `load` is polled.
    pub fn new(client: Arc<dyn HttpClient>, currency: impl Into<String>) -> Self {
        Self {
            client,
            currency: Arc::from(currency.into()),
        }
    }
}

impl LoadCryptoFeedUseCase for LoadCryptoFeedRemoteUseCase {
    fn load(&self) -> BoxStream<'static, LoadCryptoFeedResult> {
        let client = Arc::clone(&self.client);
        let currency = Arc::clone(&self.currency);

        stream::once(async move {
            tracing::debug!("Loading crypto feed");
            client.get()
        })
        .flatten()
        // A client emitting more than once still yields a single result
        .take(1)
        .map(move |received| map_received(received, &currency))
        .inspect(|result| {
            record_load_outcome(result.outcome());
            tracing::debug!(outcome = result.outcome(), "Crypto feed load finished");
        })
        .boxed()
    }
}

/// Turn the client's emission into a load result
fn map_received(
    received: Result<String, HttpClientError>,
    currency: &str,
) -> LoadCryptoFeedResult {
    match received {
        Ok(body) => match parse_crypto_feed(&body, currency) {
            Ok(items) => LoadCryptoFeedResult::Success(items),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unparseable crypto feed payload");
                LoadCryptoFeedResult::Error(LoadCryptoFeedError::InvalidData)
            }
        },
        Err(e) => LoadCryptoFeedResult::Error(e.into()),
    }
}
