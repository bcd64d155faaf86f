//! CLI interface for crypto-feed
//!
//! Provides subcommands for:
//! - `load`: Load the feed once and print it
//! - `config`: Show configuration

mod load;

pub use load::{render_table, LoadArgs, OutputFormat};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crypto-feed")]
#[command(about = "Load the crypto price feed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the feed once and print it
    Load(LoadArgs),
    /// Show configuration
    Config,
}
