use crate::domain::card::{Card, CardId};
use crate::domain::list::{List, ListId};
use crate::error::{MuroError, Result};

/// Authoritative board state: the ordered collection of lists.
///
/// All mutations of the board pass through this store. Every operation is
/// a single synchronous unit with no internal suspension points, so no
/// caller can ever observe a partially-applied mutation.
#[derive(Debug, Default)]
pub struct BoardStore {
    lists: Vec<List>,
}

impl BoardStore {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the demo board: To Do / In Progress / Done with a few cards
    pub fn sample() -> Self {
        let mut store = Self::new();

        let todo = store.create_list("To Do".to_string());
        let in_progress = store.create_list("In Progress".to_string());
        store.create_list("Done".to_string());

        // create_card cannot fail here; the lists were just created
        let _ = store.create_card(&todo.id, "Task 1".to_string(), "Description 1".to_string());
        let _ = store.create_card(&todo.id, "Task 2".to_string(), "Description 2".to_string());
        let _ = store.create_card(
            &in_progress.id,
            "Task 3".to_string(),
            "Description 3".to_string(),
        );

        store
    }

    /// Returns the lists in board order
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Looks up a list by id
    pub fn list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    /// Returns an owned copy of the full board state
    pub fn snapshot(&self) -> Vec<List> {
        self.lists.clone()
    }

    /// Creates a new empty list and appends it to the board.
    ///
    /// Title content is not validated here; that is the boundary's job.
    pub fn create_list(&mut self, title: String) -> List {
        let list = List::new(title);
        self.lists.push(list.clone());
        list
    }

    /// Removes a list and all cards it owns. No-op when the id is unknown.
    pub fn delete_list(&mut self, list_id: &ListId) {
        self.lists.retain(|l| &l.id != list_id);
    }

    /// Creates a card at the end of the named list.
    ///
    /// Fails only when the list does not exist; an empty title is accepted
    /// (content validation belongs to the boundary).
    pub fn create_card(
        &mut self,
        list_id: &ListId,
        title: String,
        description: String,
    ) -> Result<Card> {
        let list = self
            .lists
            .iter_mut()
            .find(|l| &l.id == list_id)
            .ok_or_else(|| MuroError::ListNotFound(list_id.to_string()))?;

        let card = Card::new(list_id.clone(), title, description);
        list.cards.push(card.clone());
        Ok(card)
    }

    /// Removes a card from the named list. No-op when either id is unknown.
    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) {
        if let Some(list) = self.lists.iter_mut().find(|l| &l.id == list_id) {
            list.cards.retain(|c| &c.id != card_id);
        }
    }

    /// Re-parents a card: removes it from `from`, updates its owner, and
    /// appends it to the end of `to`.
    ///
    /// All existence checks happen before any mutation, so a failed move
    /// leaves the board exactly as it was. Moving a card to its own list is
    /// a degenerate success; the card ends up last in that list.
    pub fn move_card(&mut self, card_id: &CardId, from: &ListId, to: &ListId) -> Result<()> {
        let from_idx = self
            .index_of(from)
            .ok_or_else(|| MuroError::ListNotFound(from.to_string()))?;
        let to_idx = self
            .index_of(to)
            .ok_or_else(|| MuroError::ListNotFound(to.to_string()))?;
        let card_idx = self.lists[from_idx]
            .position_of(card_id)
            .ok_or_else(|| MuroError::CardNotFound(card_id.to_string()))?;

        let mut card = self.lists[from_idx].cards.remove(card_idx);
        card.list_id = self.lists[to_idx].id.clone();
        self.lists[to_idx].cards.push(card);
        Ok(())
    }

    fn index_of(&self, list_id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == list_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_lists_one_card(store: &mut BoardStore) -> (ListId, ListId, CardId) {
        let a = store.create_list("A".to_string());
        let b = store.create_list("B".to_string());
        let card = store
            .create_card(&a.id, "card1".to_string(), "d".to_string())
            .unwrap();
        (a.id, b.id, card.id)
    }

    #[test]
    fn test_create_list_appends_in_order() {
        let mut store = BoardStore::new();
        store.create_list("First".to_string());
        store.create_list("Second".to_string());

        let titles: Vec<_> = store.lists().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_sample_board() {
        let store = BoardStore::sample();
        assert_eq!(store.lists().len(), 3);
        assert_eq!(store.lists()[0].cards.len(), 2);
        assert_eq!(store.lists()[1].cards.len(), 1);
        assert!(store.lists()[2].cards.is_empty());
    }

    #[test]
    fn test_move_card_between_lists() {
        let mut store = BoardStore::new();
        let (a, b, card1) = two_lists_one_card(&mut store);

        store.move_card(&card1, &a, &b).unwrap();

        assert!(store.list(&a).unwrap().cards.is_empty());
        let dest = store.list(&b).unwrap();
        assert_eq!(dest.cards.len(), 1);
        assert_eq!(dest.cards[0].id, card1);
        assert_eq!(dest.cards[0].list_id, b);
    }

    #[test]
    fn test_move_appends_at_end_of_destination() {
        let mut store = BoardStore::new();
        let (a, b, moved) = two_lists_one_card(&mut store);
        store
            .create_card(&b, "existing".to_string(), String::new())
            .unwrap();

        store.move_card(&moved, &a, &b).unwrap();

        let dest = store.list(&b).unwrap();
        assert_eq!(dest.cards.len(), 2);
        assert_eq!(dest.cards[1].id, moved);
    }

    #[test]
    fn test_move_atomicity_card_in_exactly_one_list() {
        let mut store = BoardStore::new();
        let (a, b, card1) = two_lists_one_card(&mut store);

        store.move_card(&card1, &a, &b).unwrap();

        let owners: usize = store
            .lists()
            .iter()
            .filter(|l| l.card(&card1).is_some())
            .count();
        assert_eq!(owners, 1);
    }

    #[test]
    fn test_move_to_own_list_is_degenerate_success() {
        let mut store = BoardStore::new();
        let a = store.create_list("A".to_string());
        let first = store
            .create_card(&a.id, "first".to_string(), String::new())
            .unwrap();
        store
            .create_card(&a.id, "second".to_string(), String::new())
            .unwrap();

        store.move_card(&first.id, &a.id, &a.id).unwrap();

        let list = store.list(&a.id).unwrap();
        assert_eq!(list.cards.len(), 2);
        // Card relocates to the end of its own list
        assert_eq!(list.cards[1].id, first.id);
        assert_eq!(list.cards[1].list_id, a.id);
    }

    #[test]
    fn test_move_unknown_from_list() {
        let mut store = BoardStore::new();
        let (_, b, card1) = two_lists_one_card(&mut store);

        let err = store
            .move_card(&card1, &ListId::from("nope"), &b)
            .unwrap_err();
        assert!(matches!(err, MuroError::ListNotFound(_)));
    }

    #[test]
    fn test_move_unknown_to_list() {
        let mut store = BoardStore::new();
        let (a, _, card1) = two_lists_one_card(&mut store);

        let err = store
            .move_card(&card1, &a, &ListId::from("nope"))
            .unwrap_err();
        assert!(matches!(err, MuroError::ListNotFound(_)));
    }

    #[test]
    fn test_move_card_not_in_source_list() {
        let mut store = BoardStore::new();
        let (a, b, card1) = two_lists_one_card(&mut store);

        // Card lives in A, claim it is in B
        let err = store.move_card(&card1, &b, &a).unwrap_err();
        assert!(matches!(err, MuroError::CardNotFound(_)));
    }

    #[test]
    fn test_failed_move_leaves_board_unchanged() {
        let mut store = BoardStore::new();
        let (a, b, card1) = two_lists_one_card(&mut store);

        let before = serde_json::to_value(store.snapshot()).unwrap();
        let _ = store.move_card(&card1, &b, &a);
        let _ = store.move_card(&card1, &a, &ListId::from("nope"));
        let after = serde_json::to_value(store.snapshot()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_list_cascades_to_cards() {
        let mut store = BoardStore::new();
        let (a, _, card1) = two_lists_one_card(&mut store);

        store.delete_list(&a);

        assert!(store.list(&a).is_none());
        let orphaned = store
            .lists()
            .iter()
            .any(|l| l.card(&card1).is_some() || l.cards.iter().any(|c| c.list_id == a));
        assert!(!orphaned);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = BoardStore::new();
        let (a, _, card1) = two_lists_one_card(&mut store);
        let before = serde_json::to_value(store.snapshot()).unwrap();

        store.delete_list(&ListId::from("nope"));
        store.delete_card(&a, &CardId::from("nope"));
        store.delete_card(&ListId::from("nope"), &card1);

        let after = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_card() {
        let mut store = BoardStore::new();
        let (a, _, card1) = two_lists_one_card(&mut store);

        store.delete_card(&a, &card1);
        assert!(store.list(&a).unwrap().cards.is_empty());
    }

    #[test]
    fn test_create_card_unknown_list() {
        let mut store = BoardStore::new();
        let err = store
            .create_card(&ListId::from("nope"), "t".to_string(), String::new())
            .unwrap_err();
        assert!(matches!(err, MuroError::ListNotFound(_)));
    }

    #[test]
    fn test_store_accepts_empty_title() {
        // Content validation is the boundary's responsibility, not the
        // store's; the store only rejects a missing list.
        let mut store = BoardStore::new();
        let a = store.create_list("A".to_string());

        let card = store
            .create_card(&a.id, String::new(), String::new())
            .unwrap();
        assert_eq!(store.list(&a.id).unwrap().cards[0].id, card.id);
    }
}
