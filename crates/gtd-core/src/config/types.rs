//! Configuration type definitions for the gtd tool

use crate::errors::GtdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtdConfig {
    /// Exact name of the board to review
    pub board_name: String,
    pub list_names: ListNames,
    pub trello: TrelloAuth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNames {
    /// Name of the inbound list new cards land in
    pub incoming: String,
}

/// Trello credentials. All four keys of the documented file format are
/// accepted; only the API key and OAuth token participate in request
/// authentication.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrelloAuth {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(default)]
    pub oauth_token: String,
    #[serde(default)]
    pub oauth_token_secret: String,
}

impl GtdConfig {
    /// Validate the configuration after environment resolution
    pub fn validate(&self) -> Result<(), GtdError> {
        if self.board_name.trim().is_empty() {
            return Err(GtdError::ConfigError(
                "board_name must not be empty".to_string(),
            ));
        }
        if self.list_names.incoming.trim().is_empty() {
            return Err(GtdError::ConfigError(
                "list_names.incoming must not be empty".to_string(),
            ));
        }
        if self.trello.api_key.is_empty() {
            return Err(GtdError::ConfigError(
                "trello.api_key is required (set it in the config file or TRELLO_API_KEY)"
                    .to_string(),
            ));
        }
        if self.trello.oauth_token.is_empty() {
            return Err(GtdError::ConfigError(
                "trello.oauth_token is required (set it in the config file or TRELLO_OAUTH_TOKEN)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
