//! Data-transfer types for the Trello entities the workflow touches.
//!
//! These are constructed at the API boundary; the rest of the program never
//! depends on the remote service's raw JSON shape.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

/// An open list on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// The unit under review. Mutable remotely through [`super::BoardApi`] only:
/// labels are append-only within a session, the containing list can change
/// once, or the card is deleted outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub id_list: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Card {
    /// Creation time of the card. Trello encodes the creation epoch in the
    /// leading 8 hex digits of every object id; malformed ids yield `None`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let prefix = self.id.get(..8)?;
        let secs = i64::from_str_radix(prefix, 16).ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}
