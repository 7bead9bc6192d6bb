//! Deck summary figures: draw pile size, threat, best stats and icon totals.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, Catalog};
use crate::core::{Category, CharacterStats, StatType};
use crate::deck::Deck;

static MULTI_POWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)multi\s*-?power").expect("multi power pattern is valid"));

static ANY_POWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)any-?power").expect("any power pattern is valid"));

/// Aggregate numbers shown alongside a deck list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Draw pile size (characters, missions and locations excluded).
    pub total_cards: u32,

    pub max_energy: i64,
    pub max_combat: i64,
    pub max_brute_force: i64,
    pub max_intelligence: i64,

    pub total_energy_icons: u32,
    pub total_combat_icons: u32,
    pub total_brute_force_icons: u32,
    pub total_intelligence_icons: u32,

    /// Character plus location threat.
    pub total_threat: i64,
}

impl DeckSummary {
    /// Compute the summary. Deck cards missing from the catalog count toward
    /// `total_cards` only.
    #[must_use]
    pub fn compute(deck: &Deck, catalog: &Catalog) -> Self {
        let mut summary = Self::default();
        let mut best = CharacterStats::default();

        for card in deck.iter() {
            if card.category.is_draw_pile() {
                summary.total_cards += card.quantity;
            }
            let Some(entry) = catalog.get_in(card.category, card.card_id.as_str()) else {
                continue;
            };

            if let Some(stats) = entry.stats() {
                best = best.max_with(stats);
            }
            if matches!(card.category, Category::Character | Category::Location) {
                summary.total_threat += entry.threat_level() * i64::from(card.quantity);
            }
            for stat in icons_of(entry) {
                summary.add_icons(stat, card.quantity);
            }
        }

        summary.max_energy = best.energy;
        summary.max_combat = best.combat;
        summary.max_brute_force = best.brute_force;
        summary.max_intelligence = best.intelligence;
        summary
    }

    /// Best value of each stat across the deck's characters.
    #[must_use]
    pub fn max_stats(&self) -> CharacterStats {
        CharacterStats::new(
            self.max_energy,
            self.max_combat,
            self.max_brute_force,
            self.max_intelligence,
        )
    }

    /// Icon total for one concrete stat; wildcards have none.
    #[must_use]
    pub fn icons(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Energy => self.total_energy_icons,
            StatType::Combat => self.total_combat_icons,
            StatType::BruteForce => self.total_brute_force_icons,
            StatType::Intelligence => self.total_intelligence_icons,
            StatType::MultiPower | StatType::AnyPower => 0,
        }
    }

    fn add_icons(&mut self, stat: StatType, quantity: u32) {
        match stat {
            StatType::Energy => self.total_energy_icons += quantity,
            StatType::Combat => self.total_combat_icons += quantity,
            StatType::BruteForce => self.total_brute_force_icons += quantity,
            StatType::Intelligence => self.total_intelligence_icons += quantity,
            StatType::MultiPower | StatType::AnyPower => {}
        }
    }
}

/// Icons one copy of a card contributes.
fn icons_of(entry: &CardDefinition) -> Vec<StatType> {
    match entry.category() {
        Category::Power => {
            let Some((_, power_type)) = entry.details.power() else {
                return Vec::new();
            };
            if power_type == StatType::AnyPower.as_str() {
                Vec::new()
            } else if MULTI_POWER.is_match(power_type) {
                StatType::CORE.to_vec()
            } else {
                StatType::CORE
                    .into_iter()
                    .filter(|s| s.as_str() == power_type)
                    .collect()
            }
        }
        Category::Teamwork => {
            let to_use = entry.to_use().unwrap_or_default();
            if ANY_POWER.is_match(to_use) {
                return Vec::new();
            }
            let lowered = to_use.to_lowercase();
            StatType::CORE
                .into_iter()
                .filter(|s| lowered.contains(&s.as_str().to_lowercase()))
                .collect()
        }
        Category::AllyUniverse => {
            let stat_type = entry.disambiguators().get(1).copied().flatten().unwrap_or_default();
            let lowered = stat_type.to_lowercase();
            StatType::CORE
                .into_iter()
                .find(|s| lowered.contains(&s.as_str().to_lowercase()))
                .into_iter()
                .collect()
        }
        Category::Special | Category::Aspect => entry
            .details
            .icons()
            .iter()
            .filter_map(|icon| StatType::parse(icon))
            .filter(|s| !s.is_wildcard())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDetails;
    use crate::deck::DeckCard;

    fn power(id: &str, value: i64, power_type: &str) -> CardDefinition {
        CardDefinition::new(id, format!("{value} - {power_type}"), CardDetails::Power {
            value,
            power_type: power_type.into(),
        })
    }

    #[test]
    fn test_power_icons() {
        let catalog = Catalog::from_entries([
            power("p1", 5, "Energy"),
            power("p2", 5, "Multi-Power"),
            power("p3", 5, "Any-Power"),
        ])
        .unwrap();
        let deck = Deck::from_cards([
            DeckCard::new(Category::Power, "p1", 2),
            DeckCard::single(Category::Power, "p2"),
            DeckCard::single(Category::Power, "p3"),
        ]);
        let summary = DeckSummary::compute(&deck, &catalog);
        assert_eq!(summary.icons(StatType::Energy), 3);
        assert_eq!(summary.icons(StatType::Combat), 1);
        assert_eq!(summary.icons(StatType::Intelligence), 1);
        assert_eq!(summary.total_cards, 4);
    }

    #[test]
    fn test_teamwork_and_ally_icons() {
        let catalog = Catalog::from_entries([
            CardDefinition::new("t1", "Ranged", CardDetails::Teamwork {
                to_use: Some("6 Combat".into()),
                followup_attack_types: None,
                acts_as: None,
            }),
            CardDefinition::new("t2", "Wild", CardDetails::Teamwork {
                to_use: Some("7 Any-Power".into()),
                followup_attack_types: None,
                acts_as: None,
            }),
            CardDefinition::new("a1", "Little John", CardDetails::AllyUniverse {
                stat_to_use: Some("5 or less".into()),
                stat_type_to_use: Some("Brute Force".into()),
                to_use: None,
            }),
        ])
        .unwrap();
        let deck = Deck::from_cards([
            DeckCard::single(Category::Teamwork, "t1"),
            DeckCard::single(Category::Teamwork, "t2"),
            DeckCard::single(Category::AllyUniverse, "a1"),
        ]);
        let summary = DeckSummary::compute(&deck, &catalog);
        assert_eq!(summary.icons(StatType::Combat), 1);
        assert_eq!(summary.icons(StatType::BruteForce), 1);
        assert_eq!(summary.icons(StatType::Energy), 0);
    }

    #[test]
    fn test_threat_and_best_stats() {
        let catalog = Catalog::from_entries([
            CardDefinition::new("c1", "Zeus", CardDetails::Character {
                energy: 7,
                combat: 3,
                brute_force: 2,
                intelligence: 5,
                threat_level: 20,
            }),
            CardDefinition::new("c2", "Hera", CardDetails::Character {
                energy: 4,
                combat: 6,
                brute_force: 2,
                intelligence: 6,
                threat_level: 18,
            }),
            CardDefinition::new("l1", "Olympus", CardDetails::Location { threat_level: 3 }),
            CardDefinition::new("s1", "Thunderbolt", CardDetails::Special {
                character_name: Some("Zeus".into()),
                icons: vec!["Energy".into(), "Any-Power".into()],
            }),
        ])
        .unwrap();
        let deck = Deck::from_cards([
            DeckCard::single(Category::Character, "c1"),
            DeckCard::single(Category::Character, "c2"),
            DeckCard::single(Category::Location, "l1"),
            DeckCard::new(Category::Special, "s1", 2),
        ]);
        let summary = DeckSummary::compute(&deck, &catalog);
        assert_eq!(summary.total_threat, 41);
        assert_eq!(summary.max_stats(), CharacterStats::new(7, 6, 2, 6));
        assert_eq!(summary.total_energy_icons, 2);
        assert_eq!(summary.total_cards, 2);
    }
}
