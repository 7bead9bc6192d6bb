//! Deck editor seam.
//!
//! The import assembler commits cards one at a time through a `DeckEditor`
//! and reads the live deck back to confirm each add took effect. Editors
//! backed by a remote store may apply adds late or not at all; the
//! assembler's settle pause and confirmation read cover both.

use tracing::debug;

use super::card::Deck;
use crate::cards::CardId;
use crate::core::{Category, CommitError};

/// A live deck that accepts single-card additions.
pub trait DeckEditor {
    /// Snapshot of the live deck.
    fn deck(&self) -> Deck;

    /// Add one copy of a card. `name` is for messages only.
    fn add_card(&mut self, category: Category, card_id: &CardId, name: &str) -> Result<(), CommitError>;
}

/// Editor over an in-memory `Deck`.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDeckEditor {
    deck: Deck,
}

impl InMemoryDeckEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self { deck }
    }

    /// Consume the editor, returning the deck.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

impl DeckEditor for InMemoryDeckEditor {
    fn deck(&self) -> Deck {
        self.deck.clone()
    }

    fn add_card(&mut self, category: Category, card_id: &CardId, name: &str) -> Result<(), CommitError> {
        debug!(%card_id, %category, name, "Adding card to deck");
        self.deck.add(category, card_id.clone(), 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_editor_adds() {
        let mut editor = InMemoryDeckEditor::new();
        let id = CardId::new("p1");
        editor.add_card(Category::Power, &id, "5 - Energy").unwrap();
        editor.add_card(Category::Power, &id, "5 - Energy").unwrap();

        assert_eq!(editor.deck().quantity_of(Category::Power, &id), 2);
        assert_eq!(editor.into_deck().len(), 1);
    }

    #[test]
    fn test_snapshot_does_not_track_later_adds() {
        let mut editor = InMemoryDeckEditor::new();
        let snapshot = editor.deck();
        editor.add_card(Category::Aspect, &CardId::new("a1"), "Supay").unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(editor.deck().len(), 1);
    }
}
