//! Card catalog.
//!
//! The `Catalog` stores every card definition in load order and indexes each
//! entry under two kinds of key:
//!
//! - its raw identifier (`"tw_1"`)
//! - category-prefixed aliases (`"teamwork_tw_1"`, `"ally-universe_a1"`,
//!   `"ally_universe_a1"`)
//!
//! Deck entries may address a card by either key kind. A key that would
//! point at two different entries is rejected at load time, so every lookup
//! is unambiguous.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use super::definition::{CardDefinition, CardId};
use crate::core::{CatalogError, CatalogResult, Category};

#[derive(Clone, Copy, Debug)]
struct KeySlot {
    index: usize,
    raw: bool,
}

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use overpower_deck::cards::{Catalog, CardDefinition, CardDetails};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .register(CardDefinition::new("m1", "Hunt", CardDetails::Mission {
///         mission_set: Some("Dracula".into()),
///     }))
///     .unwrap();
///
/// assert_eq!(catalog.get("m1").unwrap().name, "Hunt");
/// assert_eq!(catalog.get("mission_m1").unwrap().name, "Hunt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CardDefinition>,
    keys: FxHashMap<String, KeySlot>,
    by_category: FxHashMap<Category, Vec<usize>>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries, in order.
    pub fn from_entries(entries: impl IntoIterator<Item = CardDefinition>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.register(entry)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Fails without modifying the catalog when the identifier is already
    /// taken or when any of the entry's keys collides with another entry's.
    pub fn register(&mut self, card: CardDefinition) -> CatalogResult<()> {
        let raw = card.id.as_str().to_string();
        let aliases = lookup_aliases(card.category(), &card.id);

        if let Some(slot) = self.keys.get(&raw) {
            let existing = self.entries[slot.index].id.to_string();
            return Err(if slot.raw {
                CatalogError::DuplicateId(raw)
            } else {
                CatalogError::AmbiguousKey {
                    key: raw,
                    existing,
                    incoming: card.id.to_string(),
                }
            });
        }
        for alias in &aliases {
            if let Some(slot) = self.keys.get(alias) {
                return Err(CatalogError::AmbiguousKey {
                    key: alias.clone(),
                    existing: self.entries[slot.index].id.to_string(),
                    incoming: card.id.to_string(),
                });
            }
        }

        let index = self.entries.len();
        self.keys.insert(raw, KeySlot { index, raw: true });
        for alias in aliases {
            self.keys.insert(alias, KeySlot { index, raw: false });
        }
        self.by_category.entry(card.category()).or_default().push(index);

        debug!(card_id = %card.id, category = %card.category(), "Registered card");
        self.entries.push(card);
        Ok(())
    }

    /// Look up a card by raw identifier or category-prefixed alias.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardDefinition> {
        self.keys.get(key).map(|slot| &self.entries[slot.index])
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn get_id(&self, id: &CardId) -> Option<&CardDefinition> {
        self.get(id.as_str())
    }

    /// Look up a card by key, requiring it to belong to `category`.
    #[must_use]
    pub fn get_in(&self, category: Category, key: &str) -> Option<&CardDefinition> {
        self.get(key).filter(|card| card.category() == category)
    }

    /// The entry's raw identifier when `key` addresses a card of `category`,
    /// otherwise `key` itself. Every spelling of one card maps to the same id.
    #[must_use]
    pub fn canonical_id<'a>(&'a self, category: Category, key: &'a CardId) -> &'a CardId {
        self.get_in(category, key.as_str()).map_or(key, |card| &card.id)
    }

    /// Check if a key addresses a card.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all cards in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.entries.iter()
    }

    /// Iterate over the cards of one category, in load order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CardDefinition> {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.entries[index])
    }

    /// Number of cards in a category.
    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }
}

fn lookup_aliases(category: Category, id: &CardId) -> SmallVec<[String; 2]> {
    let mut aliases = SmallVec::new();
    aliases.push(format!("{}_{}", category.as_str(), id));
    if category.snake_name() != category.as_str() {
        aliases.push(format!("{}_{}", category.snake_name(), id));
    }
    aliases
}
