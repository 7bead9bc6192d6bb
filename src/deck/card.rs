//! Deck entries and the persistent deck list.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Catalog};
use crate::core::Category;

/// One deck entry: a catalog card and how many copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
    pub category: Category,
    pub card_id: CardId,
    pub quantity: u32,
}

impl DeckCard {
    #[must_use]
    pub fn new(category: Category, card_id: impl Into<CardId>, quantity: u32) -> Self {
        Self {
            category,
            card_id: card_id.into(),
            quantity,
        }
    }

    /// Single-copy entry.
    #[must_use]
    pub fn single(category: Category, card_id: impl Into<CardId>) -> Self {
        Self::new(category, card_id, 1)
    }

    fn is(&self, category: Category, card_id: &CardId) -> bool {
        self.category == category && &self.card_id == card_id
    }
}

/// Deck list backed by a persistent vector.
///
/// Cloning is O(1), so a candidate deck for validation is a clone of the
/// live deck plus the pending additions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<DeckCard>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck, merging repeated entries.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = DeckCard>) -> Self {
        let mut deck = Self::new();
        for card in cards {
            deck.add(card.category, card.card_id, card.quantity);
        }
        deck
    }

    /// Add copies, incrementing an existing entry for the same card.
    pub fn add(&mut self, category: Category, card_id: CardId, quantity: u32) {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.is(category, &card_id)) {
            existing.quantity += quantity;
            return;
        }
        self.cards.push_back(DeckCard {
            category,
            card_id,
            quantity,
        });
    }

    /// Whether the deck holds the card.
    #[must_use]
    pub fn contains(&self, category: Category, card_id: &CardId) -> bool {
        self.cards.iter().any(|c| c.is(category, card_id))
    }

    /// Copies of a card, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, category: Category, card_id: &CardId) -> u32 {
        self.cards
            .iter()
            .find(|c| c.is(category, card_id))
            .map_or(0, |c| c.quantity)
    }

    /// Distinct entries of a category.
    #[must_use]
    pub fn entries_in(&self, category: Category) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }

    /// Total copies of a category.
    #[must_use]
    pub fn count_in(&self, category: Category) -> u32 {
        self.cards
            .iter()
            .filter(|c| c.category == category)
            .map(|c| c.quantity)
            .sum()
    }

    /// Total copies across the deck.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.cards.iter().map(|c| c.quantity).sum()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter()
    }

    /// The same deck with every identifier in its canonical form, merging
    /// entries that named one card by different keys. Unknown cards keep
    /// their identifier.
    #[must_use]
    pub fn canonical(&self, catalog: &Catalog) -> Deck {
        self.cards
            .iter()
            .map(|c| DeckCard::new(c.category, catalog.canonical_id(c.category, &c.card_id).clone(), c.quantity))
            .collect()
    }

    /// Entries as a plain vector, in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<DeckCard> {
        self.cards.iter().cloned().collect()
    }
}

impl FromIterator<DeckCard> for Deck {
    fn from_iter<I: IntoIterator<Item = DeckCard>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_quantities() {
        let mut deck = Deck::new();
        deck.add(Category::Power, CardId::new("p1"), 1);
        deck.add(Category::Power, CardId::new("p1"), 2);
        deck.add(Category::Power, CardId::new("p2"), 1);

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.quantity_of(Category::Power, &CardId::new("p1")), 3);
        assert_eq!(deck.count_in(Category::Power), 4);
        assert_eq!(deck.total_quantity(), 4);
    }

    #[test]
    fn test_same_id_different_category_is_distinct() {
        let deck = Deck::from_cards([
            DeckCard::single(Category::Event, "x"),
            DeckCard::single(Category::Mission, "x"),
        ]);
        assert_eq!(deck.len(), 2);
        assert!(deck.contains(Category::Event, &CardId::new("x")));
        assert!(!deck.contains(Category::Special, &CardId::new("x")));
    }

    #[test]
    fn test_clone_is_independent() {
        let live = Deck::from_cards([DeckCard::single(Category::Character, "c1")]);
        let mut candidate = live.clone();
        candidate.add(Category::Character, CardId::new("c2"), 1);

        assert_eq!(live.entries_in(Category::Character), 1);
        assert_eq!(candidate.entries_in(Category::Character), 2);
    }

    #[test]
    fn test_canonical_merges_spellings() {
        use crate::cards::{CardDefinition, CardDetails};

        let catalog = Catalog::from_entries([CardDefinition::new("a1", "Supay", CardDetails::Aspect {
            icons: vec![],
        })])
        .unwrap();
        let deck = Deck::from_cards([
            DeckCard::single(Category::Aspect, "aspect_a1"),
            DeckCard::single(Category::Aspect, "a1"),
            DeckCard::single(Category::Aspect, "ghost"),
        ]);
        let canonical = deck.canonical(&catalog);

        assert_eq!(deck.len(), 3);
        assert_eq!(canonical.len(), 2);
        assert_eq!(canonical.quantity_of(Category::Aspect, &CardId::new("a1")), 2);
        assert!(canonical.contains(Category::Aspect, &CardId::new("ghost")));
    }

    #[test]
    fn test_deck_card_reads_category_spellings() {
        let card: DeckCard =
            serde_json::from_str(r#"{"category": "ally_universe", "card_id": "a1", "quantity": 2}"#).unwrap();
        assert_eq!(card, DeckCard::new(Category::AllyUniverse, "a1", 2));
    }

    #[test]
    fn test_to_vec_keeps_insertion_order() {
        let deck: Deck = vec![
            DeckCard::single(Category::Mission, "m2"),
            DeckCard::single(Category::Mission, "m1"),
        ]
        .into_iter()
        .collect();
        let ids: Vec<_> = deck.to_vec().into_iter().map(|c| c.card_id.0).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }
}
