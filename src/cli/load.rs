//! Load command implementation

use crate::api::{LoadCryptoFeedRemoteUseCase, ReqwestHttpClient};
use crate::config::ApiConfig;
use crate::domain::{CryptoFeed, LoadCryptoFeedResult, LoadCryptoFeedUseCase};
use clap::{Args, ValueEnum};
use futures_util::StreamExt;
use std::sync::Arc;

/// Output format for loaded items
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Number of coins to load (overrides config)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Quote currency symbol (overrides config)
    #[arg(long)]
    pub currency: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl LoadArgs {
    /// API settings with command line overrides applied
    pub fn api_config(&self, base: &ApiConfig) -> ApiConfig {
        let mut api = base.clone();
        if let Some(limit) = self.limit {
            api.limit = limit;
        }
        if let Some(ref currency) = self.currency {
            api.currency = currency.to_uppercase();
        }
        api
    }

    pub async fn execute(&self, base: &ApiConfig) -> anyhow::Result<()> {
        let api = self.api_config(base);
        let client = ReqwestHttpClient::with_config(api.client_config())?;
        let use_case =
            LoadCryptoFeedRemoteUseCase::new(Arc::new(client), api.currency.clone());

        tracing::info!(limit = api.limit, currency = %api.currency, "Loading crypto feed");

        match use_case.load().next().await {
            Some(LoadCryptoFeedResult::Success(items)) => {
                let output = match self.format {
                    OutputFormat::Table => render_table(&items, &api.currency),
                    OutputFormat::Json => serde_json::to_string_pretty(&items)?,
                };
                println!("{}", output);
                Ok(())
            }
            Some(LoadCryptoFeedResult::Error(e)) => {
                anyhow::bail!("Failed to load crypto feed: {}", e)
            }
            None => {
                tracing::warn!("Crypto feed load completed without a result");
                Ok(())
            }
        }
    }
}

/// Render feed items as a fixed-width table
pub fn render_table(items: &[CryptoFeed], currency: &str) -> String {
    let header = format!(
        "{:<4} {:<8} {:<24} {:>16} {:>10}",
        "#",
        "SYMBOL",
        "NAME",
        format!("PRICE ({})", currency),
        "24H %"
    );

    let rows = items.iter().enumerate().map(|(rank, item)| {
        format!(
            "{:<4} {:<8} {:<24} {:>16} {:>10}",
            rank + 1,
            item.name,
            item.full_name,
            item.price.round_dp(4).normalize(),
            item.change_pct_24h.round_dp(2)
        )
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
