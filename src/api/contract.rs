use serde::{Deserialize, Serialize};

use crate::domain::{CardId, ListId};
use crate::error::MuroError;

/// Body of `POST /api/lists`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub title: String,
}

/// Body of `POST /api/cards`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub title: String,
    pub description: String,
    pub list_id: ListId,
}

/// Body of `POST /api/cards/move`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub card_id: CardId,
    pub from_list_id: ListId,
    pub to_list_id: ListId,
}

/// Success acknowledgement for deletes and moves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// JSON error body returned on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A boundary-level failure: an HTTP status paired with a stable,
/// English-readable error body. Internal detail (offending ids) never
/// appears on the wire.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub status: u16,
    pub body: ErrorBody,
}

impl ApiFailure {
    fn new(status: u16, message: &str) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.to_string(),
            },
        }
    }
}

impl From<MuroError> for ApiFailure {
    fn from(err: MuroError) -> Self {
        match err {
            MuroError::ListNotFound(_) => Self::new(404, "List not found"),
            MuroError::CardNotFound(_) => Self::new(404, "Card not found"),
            MuroError::EmptyTitle => Self::new(400, "Title must not be empty"),
            _ => Self::new(500, "Internal error"),
        }
    }
}
