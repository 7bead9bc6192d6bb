//! Validation and resolution throughput.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use overpower_deck::cards::{CardDefinition, CardDetails, Catalog};
use overpower_deck::core::Category;
use overpower_deck::deck::DeckCard;
use overpower_deck::parser::parse_line;
use overpower_deck::resolver::Resolver;
use overpower_deck::validation::Validator;

const POWER_TYPES: [&str; 4] = ["Energy", "Combat", "Brute Force", "Intelligence"];

fn catalog() -> Catalog {
    let mut entries = Vec::new();
    for i in 0..40 {
        entries.push(CardDefinition::new(format!("c{i}"), format!("Character {i}"), CardDetails::Character {
            energy: 3 + i % 6,
            combat: 2 + i % 7,
            brute_force: 1 + i % 8,
            intelligence: 4 + i % 5,
            threat_level: 16 + i % 6,
        }));
        entries.push(CardDefinition::new(format!("s{i}"), format!("Special {i}"), CardDetails::Special {
            character_name: Some(format!("Character {i}")),
            icons: vec![],
        }));
    }
    for i in 0..14 {
        entries.push(CardDefinition::new(format!("m{i}"), format!("Mission {i}"), CardDetails::Mission {
            mission_set: Some(format!("Set {}", i / 7)),
        }));
    }
    for value in 1..=8 {
        for power_type in POWER_TYPES {
            entries.push(CardDefinition::new(
                format!("p{value}_{power_type}"),
                format!("{value} - {power_type}"),
                CardDetails::Power {
                    value,
                    power_type: power_type.into(),
                },
            ));
        }
    }
    for i in 0..30 {
        entries.push(CardDefinition::new(format!("tr{i}"), "Training (Drill)", CardDetails::Training {
            type_1: Some(POWER_TYPES[(i % 4) as usize].into()),
            type_2: Some(POWER_TYPES[((i + 1) % 4) as usize].into()),
            value_to_use: Some("5 or less".into()),
            bonus: Some(format!("+{}", 2 + i / 4)),
            to_use: None,
        }));
    }
    Catalog::from_entries(entries).expect("bench catalog has unique ids")
}

fn deck() -> Vec<DeckCard> {
    let mut cards: Vec<DeckCard> = (0..4).map(|i| DeckCard::single(Category::Character, format!("c{i}"))).collect();
    cards.extend((0..7).map(|i| DeckCard::single(Category::Mission, format!("m{i}"))));
    cards.extend((0..4).map(|i| DeckCard::new(Category::Special, format!("s{i}"), 2)));
    for value in 1..=6 {
        for power_type in POWER_TYPES {
            cards.push(DeckCard::new(Category::Power, format!("p{value}_{power_type}"), 2));
        }
    }
    cards
}

fn bench_validation(c: &mut Criterion) {
    let catalog = catalog();
    let cards = deck();
    let empty: Vec<DeckCard> = Vec::new();
    let validator = Validator::default();

    let mut group = c.benchmark_group("validation");
    group.throughput(Throughput::Elements(1));
    group.bench_function("full_deck", |b| {
        b.iter(|| validator.validate(black_box(&cards), black_box(&catalog)))
    });
    group.bench_function("empty_deck", |b| {
        b.iter(|| validator.validate(black_box(&empty), black_box(&catalog)))
    });
    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let catalog = catalog();
    let resolver = Resolver::new(&catalog);
    let lines: Vec<_> = (0..30)
        .map(|i| {
            parse_line(
                Category::Training,
                &format!(
                    "Training (Drill) - {} {} +{}",
                    POWER_TYPES[i % 4],
                    POWER_TYPES[(i + 1) % 4],
                    2 + i / 4
                ),
            )
        })
        .collect();

    let mut group = c.benchmark_group("resolution");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("training_lines", |b| {
        b.iter(|| resolver.resolve_all(black_box(&lines)))
    });
    group.finish();
}

criterion_group!(benches, bench_validation, bench_resolution);
criterion_main!(benches);
