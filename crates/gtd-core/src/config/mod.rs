//! Configuration module for the gtd tool
//!
//! The YAML file names the board under review, the lists of interest, and
//! the Trello credentials. Credentials left empty in the file are resolved
//! from the environment by the loader before validation runs.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests;

use crate::errors::GtdError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<GtdConfig, GtdError> {
    ConfigLoader::from_file(path).await
}
