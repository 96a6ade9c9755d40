mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML configuration (if any) and resolves environment overrides.
///
/// `CONFIG_PATH` must point at an existing file when set. Without it,
/// `./config.yaml` is used if present and built-in defaults otherwise.
/// Fails when the API key variable for the selected provider is unset.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => read_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            read_file(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_env(|key| env::var(key).ok())?;

    Ok(config)
}

async fn read_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies `PORT` and the provider API key using `lookup` as the environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        let key_env = self.llm.api_key_env().to_string();
        match lookup(&key_env) {
            Some(key) if !key.trim().is_empty() => self.llm.api_key = key,
            _ => {
                return Err(Error::config(format!(
                    "{} is not set; refusing to start without an API key",
                    key_env
                )));
            }
        }

        Ok(())
    }
}
