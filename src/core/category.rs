//! Card categories.
//!
//! Every catalog entry and every deck entry belongs to exactly one of twelve
//! categories. The category decides which line grammar parses an import line,
//! which lookup policy resolves it, and which construction rules look at it.
//!
//! Category names show up in several spellings (`basic-universe`,
//! `basic_universe`, `ally`, ...). `Category::parse` accepts all of them and
//! backs `Category` deserialization, so deck lists read any spelling.
//! `Category::as_str` is the single canonical form. Catalog entries carry
//! their category as the `CardDetails` tag, whose serde aliases cover the
//! same spellings.

use serde::{Deserialize, Deserializer, Serialize};

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Character,
    Special,
    Location,
    Mission,
    Event,
    Aspect,
    AdvancedUniverse,
    Teamwork,
    AllyUniverse,
    Training,
    BasicUniverse,
    Power,
}

impl Category {
    /// All categories, in canonical order.
    pub const ALL: [Category; 12] = [
        Category::Character,
        Category::Special,
        Category::Location,
        Category::Mission,
        Category::Event,
        Category::Aspect,
        Category::AdvancedUniverse,
        Category::Teamwork,
        Category::AllyUniverse,
        Category::Training,
        Category::BasicUniverse,
        Category::Power,
    ];

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::Special => "special",
            Category::Location => "location",
            Category::Mission => "mission",
            Category::Event => "event",
            Category::Aspect => "aspect",
            Category::AdvancedUniverse => "advanced-universe",
            Category::Teamwork => "teamwork",
            Category::AllyUniverse => "ally-universe",
            Category::Training => "training",
            Category::BasicUniverse => "basic-universe",
            Category::Power => "power",
        }
    }

    /// Snake-case name, as used in prefixed lookup keys (`ally_universe_<id>`).
    #[must_use]
    pub const fn snake_name(self) -> &'static str {
        match self {
            Category::AdvancedUniverse => "advanced_universe",
            Category::AllyUniverse => "ally_universe",
            Category::BasicUniverse => "basic_universe",
            other => other.as_str(),
        }
    }

    /// Parse any accepted spelling of a category name.
    ///
    /// Case and `_`/`-` separators are ignored, plural forms are accepted and
    /// the `-universe` suffix is optional for the three universe families.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let stem = normalized
            .strip_suffix("-universe")
            .unwrap_or(&normalized)
            .trim_end_matches('s');

        let category = match stem {
            "character" => Category::Character,
            "special" | "special-card" => Category::Special,
            "location" => Category::Location,
            "mission" => Category::Mission,
            "event" => Category::Event,
            "aspect" => Category::Aspect,
            "advanced" => Category::AdvancedUniverse,
            "teamwork" => Category::Teamwork,
            "ally" | "allie" => Category::AllyUniverse,
            "training" => Category::Training,
            "basic" => Category::BasicUniverse,
            "power" | "power-card" => Category::Power,
            _ => return None,
        };
        Some(category)
    }

    /// Categories that count toward the draw pile.
    #[must_use]
    pub const fn is_draw_pile(self) -> bool {
        !matches!(self, Category::Character | Category::Mission | Category::Location)
    }

    /// The five universe families whose entries carry a stat requirement.
    #[must_use]
    pub const fn is_universe(self) -> bool {
        matches!(
            self,
            Category::BasicUniverse
                | Category::AdvancedUniverse
                | Category::Teamwork
                | Category::AllyUniverse
                | Category::Training
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown card category '{name}'")))
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown card category '{s}'"))
    }
}
