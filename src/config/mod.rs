mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::{debug, warn};

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    if let Ok(api_key) = env::var("INFERENCE_API_KEY") {
        config.inference.api_key = Some(api_key);
    }

    Ok(config)
}

/// Reads the YAML file at `path`. A missing file yields the defaults; a file
/// that exists but does not parse is an error.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: Config = serde_yaml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.inference.base_url.trim().is_empty() {
            return Err(Error::config("inference.base_url must not be empty"));
        }
        if self.inference.model.trim().is_empty() {
            return Err(Error::config("inference.model must not be empty"));
        }
        Ok(())
    }
}
