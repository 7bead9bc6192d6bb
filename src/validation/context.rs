//! Categorized view of a deck, built once per validation.

use std::collections::{BTreeMap, BTreeSet};

use crate::cards::{CardDefinition, CardId, Catalog};
use crate::core::{Category, CharacterStats, DeckRules};
use crate::deck::DeckCard;

/// A merged deck entry with its catalog definition, if known.
#[derive(Clone, Copy, Debug)]
pub struct ContextCard<'a> {
    pub category: Category,
    pub card_id: &'a CardId,
    pub quantity: u32,
    pub entry: Option<&'a CardDefinition>,
}

impl<'a> ContextCard<'a> {
    /// Display name, falling back to the identifier for unknown cards.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.entry.map_or(self.card_id.as_str(), |e| e.name.as_str())
    }
}

/// Deck entries merged per (category, identifier) and sorted by that key.
///
/// Rules read the deck only through this view, so their findings come out
/// in the same order whatever order the input list had.
#[derive(Debug)]
pub struct DeckContext<'a> {
    cards: Vec<ContextCard<'a>>,
    rules: &'a DeckRules,
}

impl<'a> DeckContext<'a> {
    #[must_use]
    pub fn new(cards: &'a [DeckCard], catalog: &'a Catalog, rules: &'a DeckRules) -> Self {
        let mut merged: BTreeMap<(Category, &'a CardId), u32> = BTreeMap::new();
        for card in cards {
            let card_id = catalog.canonical_id(card.category, &card.card_id);
            *merged.entry((card.category, card_id)).or_default() += card.quantity;
        }

        let cards = merged
            .into_iter()
            .map(|((category, card_id), quantity)| ContextCard {
                category,
                card_id,
                quantity,
                entry: catalog.get_in(category, card_id.as_str()),
            })
            .collect();

        Self { cards, rules }
    }

    #[must_use]
    pub fn rules(&self) -> &'a DeckRules {
        self.rules
    }

    /// All merged entries in (category, identifier) order.
    pub fn cards(&self) -> impl Iterator<Item = &ContextCard<'a>> {
        self.cards.iter()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ContextCard<'a>> {
        self.cards.iter().filter(move |c| c.category == category)
    }

    /// Entries of a category that exist in the catalog.
    pub fn known_in(&self, category: Category) -> impl Iterator<Item = (&ContextCard<'a>, &'a CardDefinition)> {
        self.in_category(category)
            .filter_map(|c| c.entry.map(|entry| (c, entry)))
    }

    /// Summed quantity of a category.
    #[must_use]
    pub fn count(&self, category: Category) -> u32 {
        self.in_category(category).map(|c| c.quantity).sum()
    }

    /// Draw pile size: everything except characters, missions and locations.
    #[must_use]
    pub fn draw_pile_size(&self) -> u32 {
        self.cards
            .iter()
            .filter(|c| c.category.is_draw_pile())
            .map(|c| c.quantity)
            .sum()
    }

    #[must_use]
    pub fn has_events(&self) -> bool {
        self.in_category(Category::Event).any(|c| c.quantity > 0)
    }

    /// Names of the selected characters found in the catalog.
    #[must_use]
    pub fn character_names(&self) -> Vec<&'a str> {
        self.known_in(Category::Character)
            .map(|(_, entry)| entry.name.trim())
            .collect()
    }

    /// Stat lines of the selected characters found in the catalog.
    #[must_use]
    pub fn character_stats(&self) -> Vec<CharacterStats> {
        self.known_in(Category::Character)
            .filter_map(|(_, entry)| entry.stats())
            .collect()
    }

    /// Distinct mission sets among the deck's missions, sorted.
    #[must_use]
    pub fn mission_sets(&self) -> BTreeSet<&'a str> {
        self.known_in(Category::Mission)
            .filter_map(|(_, entry)| entry.mission_set())
            .collect()
    }
}
