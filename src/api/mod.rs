use crate::domain::{BoardStore, Card, CardId, List, ListId};
use crate::error::MuroError;

pub mod contract;

pub use contract::{
    Ack, ApiFailure, CreateCardRequest, CreateListRequest, ErrorBody, MoveCardRequest,
};

pub type ApiResult<T> = std::result::Result<T, ApiFailure>;

/// Request/response boundary in front of the board store.
///
/// Owns the store it was constructed with and holds no other state. Each
/// method corresponds to one REST endpoint; a host binds them to its
/// router and serializes the results. Creation responses echo the full
/// created entity; deletes and moves acknowledge with a success flag.
#[derive(Debug)]
pub struct BoardApi {
    store: BoardStore,
}

impl BoardApi {
    /// Wraps an existing store
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// `GET /api/lists`: the full board snapshot in display order
    pub fn board(&self) -> Vec<List> {
        self.store.snapshot()
    }

    /// `POST /api/lists`: creates a list, echoing it back.
    ///
    /// Rejects a blank title. The UI layer already trims before calling,
    /// but the guard lives here as well since this is the last point
    /// before the store.
    pub fn create_list(&mut self, req: CreateListRequest) -> ApiResult<List> {
        let title = Self::require_title(&req.title)?;
        Ok(self.store.create_list(title))
    }

    /// `DELETE /api/lists/:id`: removes a list and all its cards.
    /// Deleting an unknown id is still a success.
    pub fn delete_list(&mut self, list_id: &ListId) -> Ack {
        self.store.delete_list(list_id);
        Ack::ok()
    }

    /// `POST /api/cards`: creates a card in the named list
    pub fn create_card(&mut self, req: CreateCardRequest) -> ApiResult<Card> {
        let title = Self::require_title(&req.title)?;
        let card = self.store.create_card(&req.list_id, title, req.description)?;
        Ok(card)
    }

    /// `DELETE /api/cards/:listId/:cardId`: removes a card.
    ///
    /// An unknown list is a not-found failure; an unknown card within an
    /// existing list is still a success (idempotent delete).
    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) -> ApiResult<Ack> {
        if self.store.list(list_id).is_none() {
            return Err(MuroError::ListNotFound(list_id.to_string()).into());
        }
        self.store.delete_card(list_id, card_id);
        Ok(Ack::ok())
    }

    /// `POST /api/cards/move`: re-parents a card between lists
    pub fn move_card(&mut self, req: MoveCardRequest) -> ApiResult<Ack> {
        self.store
            .move_card(&req.card_id, &req.from_list_id, &req.to_list_id)?;
        Ok(Ack::ok())
    }

    fn require_title(raw: &str) -> ApiResult<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MuroError::EmptyTitle.into());
        }
        Ok(trimmed.to_string())
    }
}
