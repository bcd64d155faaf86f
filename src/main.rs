use clap::Parser;
use crypto_feed::cli::{Cli, Commands};
use crypto_feed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = crypto_feed::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Load(args) => {
            args.execute(&config.api).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  API: {}", config.api.base_url);
            println!(
                "  Feed: top {} in {} (timeout {}s)",
                config.api.limit, config.api.currency, config.api.timeout_secs
            );
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
