//! Configuration loader for YAML files and environment resolution

use crate::config::types::GtdConfig;
use crate::errors::GtdError;
use std::env;
use std::path::Path;
use tokio::fs;

/// Configuration loader with environment resolution
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<GtdConfig, GtdError> {
        let path = path.as_ref();
        log::info!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).await.map_err(|e| {
            GtdError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<GtdConfig, GtdError> {
        let mut config: GtdConfig = serde_yaml::from_str(content)
            .map_err(|e| GtdError::ConfigError(format!("Failed to parse YAML config: {}", e)))?;

        Self::resolve_environment(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Fill credential fields left empty in the file from the environment
    fn resolve_environment(config: &mut GtdConfig) {
        let auth = &mut config.trello;
        resolve_env(&mut auth.api_key, "TRELLO_API_KEY");
        resolve_env(&mut auth.api_secret, "TRELLO_API_SECRET");
        resolve_env(&mut auth.oauth_token, "TRELLO_OAUTH_TOKEN");
        resolve_env(&mut auth.oauth_token_secret, "TRELLO_OAUTH_TOKEN_SECRET");
    }
}

fn resolve_env(field: &mut String, var: &str) {
    if field.is_empty() {
        if let Ok(value) = env::var(var) {
            log::debug!("Resolved {} from the environment", var);
            *field = value;
        }
    }
}
