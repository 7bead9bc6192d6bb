//! Export of a deck as an import document.
//!
//! Every card is written as the line the import grammar reads back to the
//! same catalog entry: the card name, followed for attribute categories by
//! ` - ` and the entry's disambiguating attributes. Multi-copy cards repeat
//! their line once per copy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::summary::DeckSummary;
use crate::cards::{CardDefinition, Catalog};
use crate::core::{Category, StatType};
use crate::deck::Deck;
use crate::validation::Validator;

const ANY_CHARACTER: &str = "Any Character";
const UNKNOWN_MISSION_SET: &str = "Unknown Mission Set";
const UNKNOWN_CHARACTER: &str = "Unknown Character";

/// Grouped section: group name to lines.
pub type GroupedLines = BTreeMap<String, Vec<String>>;

/// Card lines by section, keyed the way import documents are.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCards {
    pub characters: Vec<String>,
    pub special_cards: GroupedLines,
    pub locations: Vec<String>,
    pub missions: GroupedLines,
    pub events: GroupedLines,
    pub aspects: Vec<String>,
    pub advanced_universe: GroupedLines,
    pub teamwork: Vec<String>,
    pub allies: Vec<String>,
    pub training: Vec<String>,
    pub basic_universe: Vec<String>,
    pub power_cards: Vec<String>,
}

impl ExportCards {
    /// Total number of lines across all sections.
    #[must_use]
    pub fn line_count(&self) -> usize {
        let grouped = |g: &GroupedLines| g.values().map(Vec::len).sum::<usize>();
        self.characters.len()
            + grouped(&self.special_cards)
            + self.locations.len()
            + grouped(&self.missions)
            + grouped(&self.events)
            + self.aspects.len()
            + grouped(&self.advanced_universe)
            + self.teamwork.len()
            + self.allies.len()
            + self.training.len()
            + self.basic_universe.len()
            + self.power_cards.len()
    }

    fn push(&mut self, category: Category, entry: &CardDefinition, line: String) {
        match category {
            Category::Character => self.characters.push(line),
            Category::Location => self.locations.push(line),
            Category::Aspect => self.aspects.push(line),
            Category::Teamwork => self.teamwork.push(line),
            Category::AllyUniverse => self.allies.push(line),
            Category::Training => self.training.push(line),
            Category::BasicUniverse => self.basic_universe.push(line),
            Category::Power => self.power_cards.push(line),
            Category::Special => self
                .special_cards
                .entry(group_name(entry.details.owner(), ANY_CHARACTER))
                .or_default()
                .push(line),
            Category::Mission => self
                .missions
                .entry(group_name(entry.mission_set(), UNKNOWN_MISSION_SET))
                .or_default()
                .push(line),
            Category::Event => self
                .events
                .entry(group_name(entry.mission_set(), UNKNOWN_MISSION_SET))
                .or_default()
                .push(line),
            Category::AdvancedUniverse => self
                .advanced_universe
                .entry(group_name(entry.details.owner(), UNKNOWN_CHARACTER))
                .or_default()
                .push(line),
        }
    }
}

fn group_name(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

/// A deck written out as an import document plus its summary figures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub summary: DeckSummary,

    /// Whether the deck passes every deck rule.
    pub legal: bool,

    pub cards: ExportCards,
}

impl ExportDocument {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pretty-printed JSON, readable by the importer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The import line that resolves back to `entry`.
#[must_use]
pub fn descriptor_line(entry: &CardDefinition) -> String {
    if let Some((value, power_type)) = entry.details.power() {
        return format!("{value} - {power_type}");
    }

    let attributes: Vec<&str> = entry.disambiguators().into_iter().flatten().collect();
    if attributes.is_empty() {
        entry.name.trim().to_string()
    } else {
        format!("{} - {}", entry.name.trim(), attributes.join(" "))
    }
}

/// Power cards sort by value, then by stat type order.
fn power_order(entry: &CardDefinition) -> (i64, u8) {
    entry.details.power().map_or((i64::MAX, u8::MAX), |(value, power_type)| {
        let rank = StatType::parse(power_type).map_or(99, StatType::display_rank);
        (value, rank)
    })
}

/// Export a deck. Cards missing from the catalog are left out.
#[must_use]
pub fn export_deck(deck: &Deck, catalog: &Catalog) -> ExportDocument {
    let mut cards = ExportCards::default();
    let mut powers: Vec<(&CardDefinition, u32)> = Vec::new();

    for card in deck.iter() {
        let Some(entry) = catalog.get_in(card.category, card.card_id.as_str()) else {
            warn!(id = %card.card_id, category = %card.category, "Skipping card missing from catalog");
            continue;
        };
        if card.category == Category::Power {
            powers.push((entry, card.quantity));
            continue;
        }
        let line = descriptor_line(entry);
        for _ in 0..card.quantity {
            cards.push(card.category, entry, line.clone());
        }
    }

    powers.sort_by_key(|(entry, _)| power_order(entry));
    for (entry, quantity) in powers {
        let line = descriptor_line(entry);
        for _ in 0..quantity {
            cards.push(Category::Power, entry, line.clone());
        }
    }

    let legal = Validator::default().is_legal(&deck.to_vec(), catalog);
    debug!(lines = cards.line_count(), legal, "Exported deck");

    ExportDocument {
        name: None,
        description: None,
        summary: DeckSummary::compute(deck, catalog),
        legal,
        cards,
    }
}
