//! Feed domain
//!
//! Feed items, load results and the use case contract consumed by presentation code

mod types;

pub use types::{CryptoFeed, LoadCryptoFeedError, LoadCryptoFeedResult};

use futures_util::stream::BoxStream;

/// Trait for feed loading use cases
pub trait LoadCryptoFeedUseCase: Send + Sync {
    /// Load the feed
    ///
    /// Nothing happens until the returned stream is polled. The stream yields
    /// at most one result and then completes.
    fn load(&self) -> BoxStream<'static, LoadCryptoFeedResult>;
}
