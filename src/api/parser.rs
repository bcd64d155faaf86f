//! CryptoCompare top list payload parsing
//!
//! The payload of `/data/top/totalvolfull` looks like:
//!
//! ```json
//! {"Data": [{"CoinInfo": {"Id": "1182", "Name": "BTC", "FullName": "Bitcoin",
//!   "ImageUrl": "/media/37746251/btc.png"},
//!   "RAW": {"USD": {"PRICE": 29000.5, "CHANGEPCT24HOUR": 1.25}}}]}
//! ```

use crate::domain::CryptoFeed;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Payload parsing errors
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body is not the expected JSON document
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct TopListResponse {
    #[serde(rename = "Data")]
    data: Vec<TopListEntry>,
}

#[derive(Debug, Deserialize)]
struct TopListEntry {
    #[serde(rename = "CoinInfo")]
    coin_info: CoinInfo,
    /// Quotes keyed by currency symbol; absent for coins that have no quote yet
    #[serde(rename = "RAW", default)]
    raw: HashMap<String, Quote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CoinInfo {
    id: String,
    name: String,
    full_name: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(rename = "PRICE")]
    price: Decimal,
    #[serde(rename = "CHANGEPCT24HOUR", default)]
    change_pct_24h: Decimal,
}

/// Parse a top list payload into feed items quoted in `currency`
///
/// Entries without a quote in `currency` are skipped; the order of the
/// remaining entries is kept.
pub fn parse_crypto_feed(body: &str, currency: &str) -> Result<Vec<CryptoFeed>, ParseError> {
    let response: TopListResponse = serde_json::from_str(body)?;
    let currency = currency.to_uppercase();

    let items: Vec<CryptoFeed> = response
        .data
        .into_iter()
        .filter_map(|mut entry| {
            let quote = entry.raw.remove(&currency)?;
            Some(CryptoFeed {
                id: entry.coin_info.id,
                name: entry.coin_info.name,
                full_name: entry.coin_info.full_name,
                image_url: entry.coin_info.image_url,
                price: quote.price,
                change_pct_24h: quote.change_pct_24h,
            })
        })
        .collect();

    tracing::trace!(
        item_count = items.len(),
        currency = %currency,
        "Parsed crypto feed payload"
    );

    Ok(items)
}
