mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to
/// `config.yaml` and then to built-in defaults when no file is present.
pub async fn load() -> Result<Config> {
    if let Ok(path) = env::var("CONFIG_PATH") {
        return load_from(&path).await;
    }

    if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
        load_from(DEFAULT_CONFIG_PATH).await
    } else {
        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", config_path, e)))?;

    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a map of defaults.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}
