//! Core library for the gtd inbox-review workflow.
//!
//! This crate holds everything that does not touch the terminal: the YAML
//! configuration system, the typed Trello REST adapter behind the [`BoardApi`]
//! seam, and the pure card filtering used by both the interactive review and
//! the read-only show mode. The companion `gtd-cli` crate owns rendering,
//! prompting, and orchestration.

pub mod config;
pub mod errors;
pub mod filter;
pub mod trello;

pub use config::{ConfigLoader, GtdConfig};
pub use errors::GtdError;
pub use trello::{BoardApi, TrelloClient};
