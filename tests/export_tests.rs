//! Export integration tests: a full deck out and back in.

use std::time::Duration;

use pretty_assertions::assert_eq;

use overpower_deck::cards::{CardDefinition, CardDetails, CatalogSession, StaticCatalogSource};
use overpower_deck::core::{Category, ImportConfig};
use overpower_deck::deck::{Deck, DeckCard, DeckEditor, InMemoryDeckEditor};
use overpower_deck::export::{export_deck, ExportDocument};
use overpower_deck::import::import_deck;

fn character(id: &str, name: &str) -> CardDefinition {
    CardDefinition::new(id, name, CardDetails::Character {
        energy: 7,
        combat: 6,
        brute_force: 5,
        intelligence: 7,
        threat_level: 18,
    })
}

fn power(id: &str, value: i64, power_type: &str) -> CardDefinition {
    CardDefinition::new(id, format!("{value} - {power_type}"), CardDetails::Power {
        value,
        power_type: power_type.into(),
    })
}

fn entries() -> Vec<CardDefinition> {
    let mut entries = vec![
        character("zeus", "Zeus"),
        character("hera", "Hera"),
        character("ares", "Ares"),
        character("athena", "Athena"),
        CardDefinition::new("olympus", "Mount Olympus", CardDetails::Location { threat_level: 2 }),
        CardDefinition::new("s_zeus", "Thunderbolt", CardDetails::Special {
            character_name: Some("Zeus".into()),
            icons: vec!["Energy".into(), "Combat".into()],
        }),
        CardDefinition::new("s_any", "Rally", CardDetails::Special {
            character_name: Some("Any Character".into()),
            icons: vec!["Any-Power".into()],
        }),
        CardDefinition::new("ev", "Olympian Feast", CardDetails::Event {
            mission_set: Some("Olympus".into()),
        }),
        CardDefinition::new("asp", "Divine Favor", CardDetails::Aspect {
            icons: vec!["Intelligence".into()],
        })
        .one_per_deck(),
        CardDefinition::new("adv", "Queen of the Gods", CardDetails::AdvancedUniverse {
            character: Some("Hera".into()),
            to_use: Some("7 Energy".into()),
        }),
        CardDefinition::new("tw_ec", "Ranged Attack", CardDetails::Teamwork {
            to_use: Some("6 Combat".into()),
            followup_attack_types: Some("Energy + Combat".into()),
            acts_as: None,
        }),
        CardDefinition::new("tw_bi", "Ranged Attack", CardDetails::Teamwork {
            to_use: Some("6 Combat".into()),
            followup_attack_types: Some("Brute Force + Intelligence".into()),
            acts_as: None,
        }),
        CardDefinition::new("al_5b", "Little John", CardDetails::AllyUniverse {
            stat_to_use: Some("5 or less".into()),
            stat_type_to_use: Some("Brute Force".into()),
            to_use: None,
        }),
        CardDefinition::new("al_7c", "Little John", CardDetails::AllyUniverse {
            stat_to_use: Some("7 or higher".into()),
            stat_type_to_use: Some("Combat".into()),
            to_use: None,
        }),
        CardDefinition::new("tr_ec", "Training (Leonidas)", CardDetails::Training {
            type_1: Some("Energy".into()),
            type_2: Some("Combat".into()),
            value_to_use: Some("5 or less".into()),
            bonus: Some("+4".into()),
            to_use: None,
        }),
        CardDefinition::new("bu_i2", "Secret Identity", CardDetails::BasicUniverse {
            stat_type: Some("Intelligence".into()),
            value_to_use: Some("6 or greater".into()),
            bonus: Some("+2".into()),
            to_use: None,
        }),
        power("p5e", 5, "Energy"),
        power("p7m", 7, "Multi Power"),
        power("p3c", 3, "Combat"),
    ];
    for i in 1..=7 {
        entries.push(CardDefinition::new(format!("m{i}"), format!("Olympus Mission {i}"), CardDetails::Mission {
            mission_set: Some("Olympus".into()),
        }));
    }
    entries
}

/// A legal deck touching every category, 56 cards in the draw pile.
fn full_deck() -> Deck {
    let mut cards = vec![
        DeckCard::single(Category::Character, "zeus"),
        DeckCard::single(Category::Character, "hera"),
        DeckCard::single(Category::Character, "ares"),
        DeckCard::single(Category::Character, "athena"),
        DeckCard::single(Category::Location, "olympus"),
        DeckCard::new(Category::Special, "s_zeus", 3),
        DeckCard::new(Category::Special, "s_any", 2),
        DeckCard::single(Category::Event, "ev"),
        DeckCard::single(Category::Aspect, "asp"),
        DeckCard::single(Category::AdvancedUniverse, "adv"),
        DeckCard::new(Category::Teamwork, "tw_ec", 3),
        DeckCard::new(Category::Teamwork, "tw_bi", 2),
        DeckCard::single(Category::AllyUniverse, "al_5b"),
        DeckCard::single(Category::AllyUniverse, "al_7c"),
        DeckCard::new(Category::Training, "tr_ec", 3),
        DeckCard::new(Category::BasicUniverse, "bu_i2", 2),
        DeckCard::new(Category::Power, "p5e", 20),
        DeckCard::new(Category::Power, "p7m", 10),
        DeckCard::new(Category::Power, "p3c", 6),
    ];
    cards.extend((1..=7).map(|i| DeckCard::single(Category::Mission, format!("m{i}"))));
    Deck::from_cards(cards)
}

fn sorted(deck: &Deck) -> Vec<DeckCard> {
    let mut cards = deck.to_vec();
    cards.sort_by_key(|c| (c.category, c.card_id.clone()));
    cards
}

// =============================================================================
// Round Trip
// =============================================================================

/// Test that re-importing an export into an empty deck reproduces the deck.
#[test]
fn test_export_reimport_reproduces_deck() {
    let entries = entries();
    let mut session = CatalogSession::new(StaticCatalogSource::new(entries)).with_reload_wait(Duration::ZERO);
    let deck = full_deck();

    let document = export_deck(&deck, session.ensure_loaded().unwrap()).with_name("Olympians");
    assert!(document.legal);
    let json = document.to_json().unwrap();

    let mut editor = InMemoryDeckEditor::new();
    let report = import_deck(&mut session, &json, &mut editor, ImportConfig::immediate()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.added as u32, deck.total_quantity());
    assert_eq!(sorted(&editor.deck()), sorted(&deck));
}

// =============================================================================
// Document Contents
// =============================================================================

/// Test the summary figures carried by the export.
#[test]
fn test_export_summary() {
    let catalog = overpower_deck::cards::Catalog::from_entries(entries()).unwrap();
    let document = export_deck(&full_deck(), &catalog);
    let summary = document.summary;

    assert_eq!(summary.total_cards, 56);
    assert_eq!(summary.total_threat, 74);
    assert_eq!(summary.max_energy, 7);
    assert_eq!(summary.max_brute_force, 5);
    // Specials 3, power 20 + 10. Training cards carry no icons.
    assert_eq!(summary.total_energy_icons, 33);
    // Specials 3, teamwork 5, ally 1, power 10 + 6.
    assert_eq!(summary.total_combat_icons, 25);
    // Ally 1, power 10.
    assert_eq!(summary.total_brute_force_icons, 11);
    // Aspect 1, power 10.
    assert_eq!(summary.total_intelligence_icons, 11);
}

/// Test the grouped sections and the JSON layout of an export.
#[test]
fn test_export_layout() {
    let catalog = overpower_deck::cards::Catalog::from_entries(entries()).unwrap();
    let document = export_deck(&full_deck(), &catalog);

    assert_eq!(document.cards.characters, vec!["Zeus", "Hera", "Ares", "Athena"]);
    assert_eq!(document.cards.special_cards["Zeus"].len(), 3);
    assert_eq!(document.cards.special_cards["Any Character"], vec!["Rally", "Rally"]);
    assert_eq!(document.cards.missions["Olympus"].len(), 7);
    assert_eq!(document.cards.advanced_universe["Hera"], vec!["Queen of the Gods"]);
    assert_eq!(document.cards.allies, vec!["Little John - 5 or less Brute Force", "Little John - 7 or higher Combat"]);
    assert_eq!(document.cards.power_cards.first().map(String::as_str), Some("3 - Combat"));
    assert_eq!(document.cards.power_cards.last().map(String::as_str), Some("7 - Multi Power"));

    let value: serde_json::Value = serde_json::to_value(&document).unwrap();
    assert_eq!(value["total_threat"], 74);
    assert_eq!(value["legal"], true);
    assert!(value.get("name").is_none());

    let parsed: ExportDocument = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, document);
}
