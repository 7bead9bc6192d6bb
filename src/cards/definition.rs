//! Card definitions - catalog entries.
//!
//! `CardDefinition` holds everything the pipeline knows about one printed
//! card: its identifier, display name, one-per-deck flag and the
//! category-specific attributes in `CardDetails`.

use serde::{Deserialize, Deserializer, Serialize};

use super::attributes::{CardDetails, Disambiguators};
use crate::core::{Category, CharacterStats};

/// Catalog identifier of a card.
///
/// Identifiers are opaque strings. Catalog files sometimes carry numeric
/// ids, which read as their decimal text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use overpower_deck::cards::{CardDefinition, CardDetails};
/// use overpower_deck::core::Category;
///
/// let nemo = CardDefinition::new("char_nemo", "Captain Nemo", CardDetails::Character {
///     energy: 5, combat: 4, brute_force: 3, intelligence: 7, threat_level: 19,
/// });
///
/// assert_eq!(nemo.category(), Category::Character);
/// assert_eq!(nemo.threat_level(), 19);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier within the catalog.
    pub id: CardId,

    /// Display name. Not unique: several universe cards share a name.
    #[serde(alias = "card_name")]
    pub name: String,

    /// Either flag marks the card as limited to one copy per deck.
    #[serde(default)]
    pub one_per_deck: bool,

    #[serde(default)]
    pub is_one_per_deck: bool,

    /// Category and category-specific attributes.
    #[serde(flatten)]
    pub details: CardDetails,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, details: CardDetails) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            one_per_deck: false,
            is_one_per_deck: false,
            details,
        }
    }

    /// Mark the card as one-per-deck (builder pattern).
    #[must_use]
    pub fn one_per_deck(mut self) -> Self {
        self.one_per_deck = true;
        self
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.details.category()
    }

    /// True when either one-per-deck flag is set.
    #[must_use]
    pub const fn is_one_per_deck(&self) -> bool {
        self.one_per_deck || self.is_one_per_deck
    }

    #[must_use]
    pub fn stats(&self) -> Option<CharacterStats> {
        self.details.stats()
    }

    #[must_use]
    pub fn threat_level(&self) -> i64 {
        self.details.threat_level()
    }

    #[must_use]
    pub fn mission_set(&self) -> Option<&str> {
        self.details.mission_set()
    }

    #[must_use]
    pub fn to_use(&self) -> Option<&str> {
        self.details.to_use()
    }

    #[must_use]
    pub fn disambiguators(&self) -> Disambiguators<'_> {
        self.details.disambiguators()
    }

    /// Whether this entry is named `name`, ignoring surrounding whitespace.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim() == name.trim()
    }
}
