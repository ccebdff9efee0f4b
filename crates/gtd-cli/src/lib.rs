//! Terminal surface for the gtd inbox-review workflow
//!
//! This crate owns everything the user sees: card rendering, the blocking
//! prompt primitives, and the per-card review loop. The binary in `main.rs`
//! wires these to stdin, stdout, and the live Trello adapter; tests drive
//! them with in-memory readers and a recording board mock.

pub mod display;
pub mod prompts;
pub mod review;
