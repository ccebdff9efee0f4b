//! Trello REST adapter and the board API seam.
//!
//! The workflow consumes exactly eight remote operations. [`BoardApi`]
//! captures them behind a trait so the review loop can be driven against a
//! recording mock in tests, while [`TrelloClient`] is the live HTTP binding.

use crate::errors::GtdError;
use async_trait::async_trait;

pub mod client;
pub mod types;

pub use client::TrelloClient;
pub use types::{Attachment, Board, BoardList, Card, Label};

/// The remote operations the review workflow needs from a kanban board.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Look up a board by exact name among the member's boards.
    async fn find_board(&self, name: &str) -> Result<Board, GtdError>;
    /// Open (non-archived) lists of a board, in board order.
    async fn open_lists(&self, board_id: &str) -> Result<Vec<BoardList>, GtdError>;
    /// All labels defined on a board.
    async fn labels(&self, board_id: &str) -> Result<Vec<Label>, GtdError>;
    /// Cards of a list, in list order.
    async fn cards_in_list(&self, list_id: &str) -> Result<Vec<Card>, GtdError>;
    /// Attachments of a card.
    async fn attachments(&self, card_id: &str) -> Result<Vec<Attachment>, GtdError>;
    /// Apply an existing board label to a card.
    async fn add_label(&self, card_id: &str, label_id: &str) -> Result<(), GtdError>;
    /// Move a card to another list.
    async fn move_card(&self, card_id: &str, list_id: &str) -> Result<(), GtdError>;
    /// Delete a card permanently.
    async fn delete_card(&self, card_id: &str) -> Result<(), GtdError>;
}
