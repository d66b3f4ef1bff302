use anyhow::Result;
use ml_backend::{config, server};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<LevelFilter> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration is read before logging exists, so failures go to stderr
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = config.server.logs.level.clone();
    let level = match validate_log_level(&log_level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG, when set, overrides the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::default().add_directive(level.into())),
        )
        .json()
        .init();

    info!("Starting ML backend with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
