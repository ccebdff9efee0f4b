//! Error types for the gtd workflow
//!
//! A single error enum covers the failure domains of the tool: configuration
//! loading, remote Trello calls, and user-facing usage errors. Remote
//! failures are never retried; they propagate to the binary, which exits
//! nonzero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtdError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Trello API request failed: {0}")]
    ApiError(String),
    #[error("Failed to parse Trello response: {0}")]
    ParsingError(String),
    #[error("{kind} '{name}' was not found on the remote account")]
    NotFound { kind: &'static str, name: String },
    #[error("{0}")]
    UsageError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for GtdError {
    fn from(err: std::io::Error) -> Self {
        GtdError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for GtdError {
    fn from(err: reqwest::Error) -> Self {
        GtdError::ApiError(err.to_string())
    }
}
