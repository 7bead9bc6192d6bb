//! Import document reading.
//!
//! An import document is a JSON object with a `cards` object. Each known
//! section key holds either a list of line strings or, for the grouped
//! sections, an object whose values are lists of line strings:
//!
//! ```json
//! { "cards": {
//!     "characters": ["Zeus", "Hera"],
//!     "missions": { "King of the Jungle": ["Rescue Jane", "..."] },
//!     "training": ["Training (Cultists) - Energy Intelligence +4"]
//! } }
//! ```
//!
//! Unknown keys and non-string items are ignored. Group names carry no
//! meaning for import.

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{Category, ImportError, ImportResult};

/// How a section stores its lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionLayout {
    List,
    Grouped,
}

/// Section keys of an import document, in reading order.
pub const SECTIONS: [(&str, Category, SectionLayout); 12] = [
    ("characters", Category::Character, SectionLayout::List),
    ("special_cards", Category::Special, SectionLayout::Grouped),
    ("locations", Category::Location, SectionLayout::List),
    ("missions", Category::Mission, SectionLayout::Grouped),
    ("events", Category::Event, SectionLayout::Grouped),
    ("aspects", Category::Aspect, SectionLayout::List),
    ("advanced_universe", Category::AdvancedUniverse, SectionLayout::Grouped),
    ("teamwork", Category::Teamwork, SectionLayout::List),
    ("allies", Category::AllyUniverse, SectionLayout::List),
    ("training", Category::Training, SectionLayout::List),
    ("basic_universe", Category::BasicUniverse, SectionLayout::List),
    ("power_cards", Category::Power, SectionLayout::List),
];

/// Section key that holds a category's lines.
#[must_use]
pub fn section_key(category: Category) -> &'static str {
    SECTIONS
        .iter()
        .find(|(_, c, _)| *c == category)
        .map_or("", |(key, _, _)| key)
}

/// One raw import line tagged with its category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportLine {
    pub category: Category,
    pub text: String,
}

/// Read every import line from document text.
///
/// Fails on malformed JSON, on a missing or non-object `cards` field, and
/// when the document yields no lines at all.
pub fn read_import_document(text: &str) -> ImportResult<Vec<ImportLine>> {
    let document: Value = serde_json::from_str(text)?;
    read_import_value(&document)
}

/// Read every import line from an already parsed document.
pub fn read_import_value(document: &Value) -> ImportResult<Vec<ImportLine>> {
    let cards = document
        .get("cards")
        .and_then(Value::as_object)
        .ok_or_else(|| ImportError::InvalidFormat("missing cards section".to_string()))?;

    let lines = collect_lines(cards);
    if lines.is_empty() {
        return Err(ImportError::NoCards);
    }

    debug!(lines = lines.len(), "Read import document");
    Ok(lines)
}

fn collect_lines(cards: &Map<String, Value>) -> Vec<ImportLine> {
    let mut lines = Vec::new();
    for (key, category, layout) in SECTIONS {
        let Some(section) = cards.get(key) else {
            continue;
        };
        match layout {
            SectionLayout::List => push_strings(&mut lines, category, section),
            SectionLayout::Grouped => {
                if let Some(groups) = section.as_object() {
                    for group in groups.values() {
                        push_strings(&mut lines, category, group);
                    }
                }
            }
        }
    }
    lines
}

fn push_strings(lines: &mut Vec<ImportLine>, category: Category, value: &Value) {
    let Some(items) = value.as_array() else {
        return;
    };
    lines.extend(
        items
            .iter()
            .filter_map(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(|text| ImportLine {
                category,
                text: text.to_string(),
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lists_and_groups() {
        let text = r#"{"cards": {
            "characters": ["Zeus", "Hera"],
            "missions": {"Set A": ["M1", "M2"], "Set B": ["M3"]},
            "power_cards": ["5 - Energy"]
        }}"#;
        let lines = read_import_document(text).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], ImportLine { category: Category::Character, text: "Zeus".into() });
        assert_eq!(lines.iter().filter(|l| l.category == Category::Mission).count(), 3);
        assert_eq!(lines[5].category, Category::Power);
    }

    #[test]
    fn test_ignores_unknown_keys_and_non_strings() {
        let text = r#"{"cards": {
            "characters": ["Zeus", 7, null, "  "],
            "sideboard": ["Hera"]
        }}"#;
        let lines = read_import_document(text).unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        let err = read_import_document("{not json").unwrap_err();
        assert!(matches!(err, ImportError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn test_missing_cards_object() {
        assert!(matches!(
            read_import_document(r#"{"name": "deck"}"#).unwrap_err(),
            ImportError::InvalidFormat(_)
        ));
        assert!(matches!(
            read_import_document(r#"{"cards": ["Zeus"]}"#).unwrap_err(),
            ImportError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_empty_document() {
        let err = read_import_document(r#"{"cards": {"characters": []}}"#).unwrap_err();
        assert!(matches!(err, ImportError::NoCards));
        assert_eq!(err.to_string(), "No cards found in import data");
    }

    #[test]
    fn test_section_keys() {
        assert_eq!(section_key(Category::AllyUniverse), "allies");
        assert_eq!(section_key(Category::Special), "special_cards");
        for category in Category::ALL {
            assert!(!section_key(category).is_empty());
        }
    }
}
