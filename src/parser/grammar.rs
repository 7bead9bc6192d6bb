//! Per-category import line grammars.
//!
//! Lines of the multi-field categories have the shape `<name> - <suffix>`,
//! split at the first `" - "`. The suffix grammar depends on the category:
//!
//! | Category       | Suffix                                   |
//! |----------------|------------------------------------------|
//! | teamwork       | follow-up attack types, verbatim         |
//! | ally           | `[<stat_to_use>] <stat type>`            |
//! | training       | `[<type> [<type>]] [<signed bonus>]`     |
//! | basic-universe | `[<stat type>] [<value>] [<signed bonus>]` |
//!
//! Power lines are normalized to `<value> - <type>`. Every other category is
//! name-only: the whole line is the name, even when it contains `" - "`.
//!
//! Parsing never fails. A line that doesn't fit its grammar degrades to a
//! descriptor with fewer attributes, and lookup decides whether it resolves.

use once_cell::sync::Lazy;
use regex::Regex;

use super::descriptor::{CardDescriptor, DescriptorAttributes};
use crate::core::{Category, StatType};

static TRAILING_BONUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(.*?)\s+)?([+-]\d+)$").expect("bonus pattern is valid")
});

static POWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*-\s*(.+)$").expect("power pattern is valid")
});

/// Grammar applied to one import line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineGrammar {
    NameOnly,
    Teamwork,
    Ally,
    Training,
    BasicUniverse,
    Power,
}

impl LineGrammar {
    /// Grammar used for a category's lines.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Teamwork => LineGrammar::Teamwork,
            Category::AllyUniverse => LineGrammar::Ally,
            Category::Training => LineGrammar::Training,
            Category::BasicUniverse => LineGrammar::BasicUniverse,
            Category::Power => LineGrammar::Power,
            _ => LineGrammar::NameOnly,
        }
    }

    /// Parse one line into a descriptor of `category`.
    #[must_use]
    pub fn parse(self, category: Category, line: &str) -> CardDescriptor {
        let line = line.trim();

        if self == LineGrammar::Power {
            return CardDescriptor::named(category, normalize_power_line(line));
        }
        if self == LineGrammar::NameOnly {
            return CardDescriptor::named(category, line);
        }

        let Some((name, suffix)) = split_suffix(line) else {
            return CardDescriptor::named(category, line);
        };

        let attributes = match self {
            LineGrammar::Teamwork => DescriptorAttributes::Teamwork {
                followup_attack_types: Some(suffix.to_string()),
            },
            LineGrammar::Ally => parse_ally(suffix),
            LineGrammar::Training => parse_training(suffix),
            LineGrammar::BasicUniverse => parse_basic_universe(suffix),
            LineGrammar::NameOnly | LineGrammar::Power => DescriptorAttributes::empty_for(category),
        };

        CardDescriptor::named(category, name).with_attributes(attributes)
    }
}

/// Parse one import line of `category`.
#[must_use]
pub fn parse_line(category: Category, line: &str) -> CardDescriptor {
    LineGrammar::for_category(category).parse(category, line)
}

/// Split `<name> - <suffix>` at the first separator.
fn split_suffix(line: &str) -> Option<(&str, &str)> {
    let (name, suffix) = line.split_once(" - ")?;
    let (name, suffix) = (name.trim(), suffix.trim());
    if name.is_empty() || suffix.is_empty() {
        return None;
    }
    Some((name, suffix))
}

/// Split a trailing signed integer token off `text`.
fn split_bonus(text: &str) -> (&str, Option<&str>) {
    match TRAILING_BONUS.captures(text) {
        Some(caps) => {
            let rest = caps.get(1).map_or("", |m| m.as_str());
            let bonus = caps.get(2).map(|m| m.as_str());
            (rest.trim(), bonus)
        }
        None => (text, None),
    }
}

/// Match a stat name at the front of `text`, followed by whitespace or the end.
fn match_front<'t>(text: &'t str, vocabulary: &[StatType]) -> Option<(StatType, &'t str)> {
    vocabulary.iter().find_map(|&stat| {
        let rest = text.strip_prefix(stat.as_str())?;
        if rest.is_empty() {
            Some((stat, rest))
        } else if rest.starts_with(char::is_whitespace) {
            Some((stat, rest.trim_start()))
        } else {
            None
        }
    })
}

/// Match a stat name at the end of `text`, preceded by whitespace or the start.
fn match_back<'t>(text: &'t str, vocabulary: &[StatType]) -> Option<(StatType, &'t str)> {
    vocabulary.iter().find_map(|&stat| {
        let head = text.strip_suffix(stat.as_str())?;
        if head.is_empty() {
            Some((stat, head))
        } else if head.ends_with(char::is_whitespace) {
            Some((stat, head.trim_end()))
        } else {
            None
        }
    })
}

fn owned(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn parse_ally(suffix: &str) -> DescriptorAttributes {
    match match_back(suffix, &StatType::IMPORT_VOCABULARY) {
        Some((stat, head)) => DescriptorAttributes::Ally {
            stat_to_use: owned(head),
            stat_type_to_use: Some(stat.as_str().to_string()),
        },
        None => DescriptorAttributes::Ally {
            stat_to_use: owned(suffix),
            stat_type_to_use: None,
        },
    }
}

fn parse_training(suffix: &str) -> DescriptorAttributes {
    let (rest, bonus) = split_bonus(suffix);
    let (type_1, type_2) = match match_front(rest, &StatType::IMPORT_VOCABULARY) {
        Some((first, tail)) => {
            let second = match_front(tail, &StatType::IMPORT_VOCABULARY).map(|(stat, _)| stat);
            (Some(first), second)
        }
        None => (None, None),
    };

    DescriptorAttributes::Training {
        type_1: type_1.map(|s| s.as_str().to_string()),
        type_2: type_2.map(|s| s.as_str().to_string()),
        bonus: bonus.map(str::to_string),
    }
}

fn parse_basic_universe(suffix: &str) -> DescriptorAttributes {
    let (rest, bonus) = split_bonus(suffix);
    let (stat_type, value_to_use) = match match_front(rest, &StatType::BASIC_VOCABULARY) {
        Some((stat, tail)) => (Some(stat.as_str().to_string()), owned(tail)),
        None => (None, owned(rest)),
    };

    DescriptorAttributes::BasicUniverse {
        stat_type,
        value_to_use,
        bonus: bonus.map(str::to_string),
    }
}

/// Normalize `" 2  -  Energy "` to `"2 - Energy"`; other text passes through trimmed.
#[must_use]
pub fn normalize_power_line(line: &str) -> String {
    match split_power_name(line) {
        Some((value, power_type)) => format!("{value} - {power_type}"),
        None => line.trim().to_string(),
    }
}

/// Split a power card name into its value and type text.
#[must_use]
pub fn split_power_name(name: &str) -> Option<(i64, &str)> {
    let caps = POWER_LINE.captures(name.trim())?;
    let value = caps.get(1)?.as_str().parse().ok()?;
    let power_type = caps.get(2)?.as_str().trim();
    Some((value, power_type))
}
