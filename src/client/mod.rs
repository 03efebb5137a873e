use async_trait::async_trait;

use crate::domain::{CardId, ListId};
use crate::error::Result;

pub mod drag;

pub use drag::{DragController, DragState, DropOutcome};

/// Seam between the drag controller and the concrete rendering surface.
///
/// The host owns pointer geometry: when it resolves which list container
/// the pointer is over, it must use bounds containment rather than raw
/// enter/leave events, so crossing into a nested element does not read as
/// leaving the container.
pub trait BoardSurface {
    /// Marks or unmarks a card as being dragged (reduced opacity or
    /// equivalent)
    fn set_drag_styling(&mut self, card_id: &CardId, active: bool);

    /// Highlights or un-highlights a list as the current drop candidate
    fn set_drop_highlight(&mut self, list_id: &ListId, active: bool);

    /// Moves the card's element into the target list's container and
    /// updates its recorded list association
    fn relocate_card(&mut self, card_id: &CardId, to_list_id: &ListId);

    /// Raises a user-visible failure notification
    fn notify_failure(&mut self, message: &str);
}

/// The move request the controller issues on a cross-list drop; in a real
/// host this is `POST /api/cards/move`. Transport-level problems surface
/// as `MuroError::TransportFailure`.
#[async_trait]
pub trait MoveApi {
    async fn move_card(&self, card_id: &CardId, from: &ListId, to: &ListId) -> Result<()>;
}
