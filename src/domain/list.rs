use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::card::{Card, CardId};

/// Opaque unique identifier for a list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(String);

impl ListId {
    /// Generates a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of cards; one board column.
///
/// The order of `cards` is the authoritative display order. Cards are only
/// ever appended; there is no intra-list reordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<Card>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl List {
    /// Creates a new empty list
    pub fn new(title: String) -> Self {
        Self {
            id: ListId::generate(),
            title,
            cards: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Looks up a card by id
    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == card_id)
    }

    /// Returns the position of a card within this list
    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }
}
