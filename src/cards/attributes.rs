//! Per-category card attributes.
//!
//! Each category carries its own set of fields. `CardDetails` is tagged by
//! `category` in catalog JSON, so a catalog entry reads as one flat object:
//!
//! ```json
//! { "id": "tw_1", "name": "Ranged Combat", "category": "teamwork",
//!   "to_use": "6 Combat", "followup_attack_types": "Brute Force + Energy" }
//! ```
//!
//! Free-text attributes tolerate numbers in the source data (`"stat_to_use": 5`
//! reads as `"5"`).

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Category, CharacterStats};

/// Ordered attribute values used to tell same-named entries apart.
pub type Disambiguators<'a> = SmallVec<[Option<&'a str>; 3]>;

/// Category plus category-specific fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum CardDetails {
    Character {
        #[serde(default)]
        energy: i64,
        #[serde(default)]
        combat: i64,
        #[serde(default)]
        brute_force: i64,
        #[serde(default)]
        intelligence: i64,
        #[serde(default)]
        threat_level: i64,
    },
    #[serde(alias = "special-card", alias = "special_card")]
    Special {
        #[serde(default, alias = "character")]
        character_name: Option<String>,
        #[serde(default)]
        icons: Vec<String>,
    },
    Location {
        #[serde(default)]
        threat_level: i64,
    },
    Mission {
        #[serde(default)]
        mission_set: Option<String>,
    },
    Event {
        #[serde(default)]
        mission_set: Option<String>,
    },
    Aspect {
        #[serde(default)]
        icons: Vec<String>,
    },
    #[serde(alias = "advanced_universe", alias = "advanced")]
    AdvancedUniverse {
        #[serde(default)]
        character: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        to_use: Option<String>,
    },
    Teamwork {
        #[serde(default, deserialize_with = "text_or_number")]
        to_use: Option<String>,
        #[serde(default, alias = "follow_up_attack_types")]
        followup_attack_types: Option<String>,
        #[serde(default)]
        acts_as: Option<String>,
    },
    #[serde(alias = "ally_universe", alias = "ally")]
    AllyUniverse {
        #[serde(default, deserialize_with = "text_or_number")]
        stat_to_use: Option<String>,
        #[serde(default)]
        stat_type_to_use: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        to_use: Option<String>,
    },
    Training {
        #[serde(default, alias = "type1")]
        type_1: Option<String>,
        #[serde(default, alias = "type2")]
        type_2: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        value_to_use: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        bonus: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        to_use: Option<String>,
    },
    #[serde(alias = "basic_universe", alias = "basic")]
    BasicUniverse {
        #[serde(default, rename = "type", alias = "stat_type")]
        stat_type: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        value_to_use: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        bonus: Option<String>,
        #[serde(default, deserialize_with = "text_or_number")]
        to_use: Option<String>,
    },
    #[serde(alias = "power-card", alias = "power_card")]
    Power {
        value: i64,
        power_type: String,
    },
}

impl CardDetails {
    /// Category this entry belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            CardDetails::Character { .. } => Category::Character,
            CardDetails::Special { .. } => Category::Special,
            CardDetails::Location { .. } => Category::Location,
            CardDetails::Mission { .. } => Category::Mission,
            CardDetails::Event { .. } => Category::Event,
            CardDetails::Aspect { .. } => Category::Aspect,
            CardDetails::AdvancedUniverse { .. } => Category::AdvancedUniverse,
            CardDetails::Teamwork { .. } => Category::Teamwork,
            CardDetails::AllyUniverse { .. } => Category::AllyUniverse,
            CardDetails::Training { .. } => Category::Training,
            CardDetails::BasicUniverse { .. } => Category::BasicUniverse,
            CardDetails::Power { .. } => Category::Power,
        }
    }

    /// Character stat line.
    #[must_use]
    pub fn stats(&self) -> Option<CharacterStats> {
        match *self {
            CardDetails::Character {
                energy,
                combat,
                brute_force,
                intelligence,
                ..
            } => Some(CharacterStats::new(energy, combat, brute_force, intelligence)),
            _ => None,
        }
    }

    /// Threat contributed by characters and locations; zero elsewhere.
    #[must_use]
    pub fn threat_level(&self) -> i64 {
        match *self {
            CardDetails::Character { threat_level, .. } | CardDetails::Location { threat_level } => {
                threat_level
            }
            _ => 0,
        }
    }

    /// Mission set of a mission or event.
    #[must_use]
    pub fn mission_set(&self) -> Option<&str> {
        match self {
            CardDetails::Mission { mission_set } | CardDetails::Event { mission_set } => {
                non_empty(mission_set.as_deref())
            }
            _ => None,
        }
    }

    /// Owning character of a special or advanced-universe card.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        match self {
            CardDetails::Special { character_name, .. } => non_empty(character_name.as_deref()),
            CardDetails::AdvancedUniverse { character, .. } => non_empty(character.as_deref()),
            _ => None,
        }
    }

    /// Free-text stat requirement of a universe card.
    #[must_use]
    pub fn to_use(&self) -> Option<&str> {
        match self {
            CardDetails::AdvancedUniverse { to_use, .. }
            | CardDetails::Teamwork { to_use, .. }
            | CardDetails::AllyUniverse { to_use, .. }
            | CardDetails::Training { to_use, .. }
            | CardDetails::BasicUniverse { to_use, .. } => non_empty(to_use.as_deref()),
            _ => None,
        }
    }

    /// Printed icons of specials and aspects.
    #[must_use]
    pub fn icons(&self) -> &[String] {
        match self {
            CardDetails::Special { icons, .. } | CardDetails::Aspect { icons } => icons,
            _ => &[],
        }
    }

    /// Value and power type of a power card.
    #[must_use]
    pub fn power(&self) -> Option<(i64, &str)> {
        match self {
            CardDetails::Power { value, power_type } => Some((*value, power_type.trim())),
            _ => None,
        }
    }

    /// Trimmed attribute values that tell same-named entries of a category
    /// apart, in import-line order. Empty strings read as absent. Categories
    /// resolved by name alone have none.
    #[must_use]
    pub fn disambiguators(&self) -> Disambiguators<'_> {
        match self {
            CardDetails::Teamwork {
                followup_attack_types,
                ..
            } => smallvec![non_empty(followup_attack_types.as_deref())],
            CardDetails::AllyUniverse {
                stat_to_use,
                stat_type_to_use,
                ..
            } => smallvec![
                non_empty(stat_to_use.as_deref()),
                non_empty(stat_type_to_use.as_deref()),
            ],
            CardDetails::Training {
                type_1,
                type_2,
                bonus,
                ..
            } => smallvec![
                non_empty(type_1.as_deref()),
                non_empty(type_2.as_deref()),
                non_empty(bonus.as_deref()),
            ],
            CardDetails::BasicUniverse {
                stat_type,
                value_to_use,
                bonus,
                ..
            } => smallvec![
                non_empty(stat_type.as_deref()),
                non_empty(value_to_use.as_deref()),
                non_empty(bonus.as_deref()),
            ],
            _ => SmallVec::new(),
        }
    }
}

/// Trim, treating blank text as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
