use crate::client::{BoardSurface, MoveApi};
use crate::domain::{CardId, ListId};

/// Phase of the current drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        card_id: CardId,
        from_list_id: ListId,
    },
}

/// How a completed gesture was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside any list container; nothing was attempted
    Abandoned,
    /// Released over the card's own list; no request issued
    SameList,
    /// The store confirmed the move and the surface was updated
    Moved,
    /// The request failed; the surface was left untouched
    Failed,
}

/// Client-side drag-and-drop state machine.
///
/// Tracks one gesture from grab to release and keeps the rendering surface
/// consistent with the authoritative store. The surface is only told to
/// relocate a card after the store has confirmed the move; a failed or
/// abandoned gesture leaves the surface exactly as it was, apart from
/// clearing the transient drag styling.
///
/// `drop_on` holds the controller exclusively until the move request
/// settles, so a second gesture cannot start while a move is outstanding.
pub struct DragController<S: BoardSurface, M: MoveApi> {
    surface: S,
    mover: M,
    state: DragState,
    hovered: Option<ListId>,
}

impl<S: BoardSurface, M: MoveApi> DragController<S, M> {
    pub fn new(surface: S, mover: M) -> Self {
        Self {
            surface,
            mover,
            state: DragState::Idle,
            hovered: None,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Read access to the surface, for hosts that own it through the
    /// controller
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Begins a gesture on a card. Refused (returning `false`, with no
    /// state change) while another gesture is active.
    pub fn drag_start(&mut self, card_id: CardId, from_list_id: ListId) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.surface.set_drag_styling(&card_id, true);
        self.state = DragState::Dragging {
            card_id,
            from_list_id,
        };
        true
    }

    /// Updates the hovered drop candidate. `None` means the pointer is
    /// over no list container. Highlights only change when the resolved
    /// target changes, so repeated reports of the same container are
    /// cheap no-ops. Ignored while idle.
    pub fn hover(&mut self, target: Option<&ListId>) {
        if !self.is_dragging() {
            return;
        }
        if self.hovered.as_ref() == target {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            self.surface.set_drop_highlight(&prev, false);
        }
        if let Some(list_id) = target {
            self.surface.set_drop_highlight(list_id, true);
            self.hovered = Some(list_id.clone());
        }
    }

    /// Ends the gesture over `target` (or nowhere) and reconciles the
    /// surface with the outcome.
    ///
    /// The drag styling is cleared at gesture end no matter how the drop
    /// resolves. For a cross-list drop the target's highlight stays up
    /// while the request is in flight and is cleared once it settles.
    pub async fn drop_on(&mut self, target: Option<&ListId>) -> DropOutcome {
        let (card_id, from_list_id) =
            match std::mem::replace(&mut self.state, DragState::Idle) {
                DragState::Dragging {
                    card_id,
                    from_list_id,
                } => (card_id, from_list_id),
                DragState::Idle => return DropOutcome::Abandoned,
            };

        self.surface.set_drag_styling(&card_id, false);

        let to_list_id = match target {
            Some(list_id) => list_id,
            None => {
                self.clear_hover();
                return DropOutcome::Abandoned;
            }
        };

        if *to_list_id == from_list_id {
            self.clear_hover();
            return DropOutcome::SameList;
        }

        let result = self
            .mover
            .move_card(&card_id, &from_list_id, to_list_id)
            .await;
        self.clear_hover();

        match result {
            Ok(()) => {
                log::debug!(
                    "card {} moved from list {} to list {}",
                    card_id,
                    from_list_id,
                    to_list_id
                );
                self.surface.relocate_card(&card_id, to_list_id);
                DropOutcome::Moved
            }
            Err(err) => {
                log::warn!("moving card {} failed: {}", card_id, err);
                self.surface.notify_failure("Failed to move card");
                DropOutcome::Failed
            }
        }
    }

    fn clear_hover(&mut self) {
        if let Some(prev) = self.hovered.take() {
            self.surface.set_drop_highlight(&prev, false);
        }
    }
}
