//! Stat types, character stat lines and stat requirements.
//!
//! Characters carry four stats. Power cards, universe cards and several
//! import grammars refer to a stat by name; `Any-Power` and `Multi Power`
//! are wildcards that compare against a character's best stat.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A named character stat, or one of the two wildcards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatType {
    Energy,
    Combat,
    #[serde(rename = "Brute Force")]
    BruteForce,
    Intelligence,
    #[serde(rename = "Multi Power", alias = "Multi-Power")]
    MultiPower,
    #[serde(rename = "Any-Power", alias = "Any Power")]
    AnyPower,
}

impl StatType {
    /// The four concrete stats.
    pub const CORE: [StatType; 4] = [
        StatType::Energy,
        StatType::Combat,
        StatType::BruteForce,
        StatType::Intelligence,
    ];

    /// Stat vocabulary of the ally and training grammars.
    ///
    /// The two-word name comes first so prefix and suffix matching never
    /// stops at a shorter term.
    pub const IMPORT_VOCABULARY: [StatType; 4] = [
        StatType::BruteForce,
        StatType::Energy,
        StatType::Combat,
        StatType::Intelligence,
    ];

    /// Stat vocabulary of the basic-universe grammar.
    pub const BASIC_VOCABULARY: [StatType; 5] = [
        StatType::BruteForce,
        StatType::Energy,
        StatType::Combat,
        StatType::Intelligence,
        StatType::AnyPower,
    ];

    /// Display name, as printed on cards.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatType::Energy => "Energy",
            StatType::Combat => "Combat",
            StatType::BruteForce => "Brute Force",
            StatType::Intelligence => "Intelligence",
            StatType::MultiPower => "Multi Power",
            StatType::AnyPower => "Any-Power",
        }
    }

    /// Parse a stat name. Accepts both spellings of each wildcard.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "Energy" => Some(StatType::Energy),
            "Combat" => Some(StatType::Combat),
            "Brute Force" => Some(StatType::BruteForce),
            "Intelligence" => Some(StatType::Intelligence),
            "Multi Power" | "Multi-Power" => Some(StatType::MultiPower),
            "Any-Power" | "Any Power" => Some(StatType::AnyPower),
            _ => None,
        }
    }

    /// True for `Any-Power` and `Multi Power`.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, StatType::AnyPower | StatType::MultiPower)
    }

    /// Sort rank used when listing power cards.
    #[must_use]
    pub const fn display_rank(self) -> u8 {
        match self {
            StatType::Energy => 1,
            StatType::Combat => 2,
            StatType::BruteForce => 3,
            StatType::Intelligence => 4,
            StatType::MultiPower => 5,
            StatType::AnyPower => 6,
        }
    }
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character's four stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterStats {
    pub energy: i64,
    pub combat: i64,
    pub brute_force: i64,
    pub intelligence: i64,
}

impl CharacterStats {
    /// Create a stat line.
    #[must_use]
    pub const fn new(energy: i64, combat: i64, brute_force: i64, intelligence: i64) -> Self {
        Self {
            energy,
            combat,
            brute_force,
            intelligence,
        }
    }

    /// Value of a stat. Wildcards read the best of the four.
    #[must_use]
    pub fn value(&self, stat: StatType) -> i64 {
        match stat {
            StatType::Energy => self.energy,
            StatType::Combat => self.combat,
            StatType::BruteForce => self.brute_force,
            StatType::Intelligence => self.intelligence,
            StatType::MultiPower | StatType::AnyPower => self.best(),
        }
    }

    /// Highest of the four stats.
    #[must_use]
    pub fn best(&self) -> i64 {
        self.energy
            .max(self.combat)
            .max(self.brute_force)
            .max(self.intelligence)
    }

    /// Element-wise maximum.
    #[must_use]
    pub fn max_with(self, other: CharacterStats) -> Self {
        Self {
            energy: self.energy.max(other.energy),
            combat: self.combat.max(other.combat),
            brute_force: self.brute_force.max(other.brute_force),
            intelligence: self.intelligence.max(other.intelligence),
        }
    }
}

static REQUIREMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s+(Energy|Combat|Brute Force|Intelligence|Any-Power)")
        .expect("requirement pattern is valid")
});

/// "N or more of stat T", parsed from a universe card's `to_use` text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatRequirement {
    pub value: i64,
    pub stat: StatType,
}

impl StatRequirement {
    #[must_use]
    pub const fn new(value: i64, stat: StatType) -> Self {
        Self { value, stat }
    }

    /// Extract the first `<N> <stat>` pair from free text such as
    /// `"6 Combat"` or `"7 Any-Power"`. Text without one yields `None`.
    #[must_use]
    pub fn parse_to_use(text: &str) -> Option<Self> {
        let caps = REQUIREMENT.captures(text)?;
        let value = caps[1].parse().ok()?;
        let stat = StatType::parse(&caps[2])?;
        Some(Self { value, stat })
    }

    /// Whether a character's stats satisfy the requirement.
    #[must_use]
    pub fn is_met_by(&self, stats: &CharacterStats) -> bool {
        stats.value(self.stat) >= self.value
    }
}

impl std::fmt::Display for StatRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+ {}", self.value, self.stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_parse() {
        assert_eq!(StatType::parse("Brute Force"), Some(StatType::BruteForce));
        assert_eq!(StatType::parse(" Energy "), Some(StatType::Energy));
        assert_eq!(StatType::parse("Multi-Power"), Some(StatType::MultiPower));
        assert_eq!(StatType::parse("Multi Power"), Some(StatType::MultiPower));
        assert_eq!(StatType::parse("Any Power"), Some(StatType::AnyPower));
        assert_eq!(StatType::parse("energy"), None);
    }

    #[test]
    fn test_wildcards_use_best_stat() {
        let stats = CharacterStats::new(3, 8, 2, 5);
        assert_eq!(stats.value(StatType::Combat), 8);
        assert_eq!(stats.value(StatType::AnyPower), 8);
        assert_eq!(stats.value(StatType::MultiPower), 8);
        assert_eq!(stats.value(StatType::Intelligence), 5);
    }

    #[test]
    fn test_requirement_parse() {
        let req = StatRequirement::parse_to_use("6 Combat").unwrap();
        assert_eq!(req, StatRequirement::new(6, StatType::Combat));

        let req = StatRequirement::parse_to_use("7 Brute Force").unwrap();
        assert_eq!(req.stat, StatType::BruteForce);

        let req = StatRequirement::parse_to_use("5 Any-Power").unwrap();
        assert_eq!(req.stat, StatType::AnyPower);

        assert!(StatRequirement::parse_to_use("Energy").is_none());
        assert!(StatRequirement::parse_to_use("").is_none());
    }

    #[test]
    fn test_requirement_met() {
        let stats = CharacterStats::new(6, 4, 2, 1);
        assert!(StatRequirement::new(6, StatType::Energy).is_met_by(&stats));
        assert!(!StatRequirement::new(7, StatType::Energy).is_met_by(&stats));
        assert!(StatRequirement::new(6, StatType::AnyPower).is_met_by(&stats));
        assert_eq!(StatRequirement::new(6, StatType::Energy).to_string(), "6+ Energy");
    }

    #[test]
    fn test_display_rank_orders_wildcards_last() {
        let mut stats = vec![StatType::AnyPower, StatType::Combat, StatType::MultiPower, StatType::Energy];
        stats.sort_by_key(|s| s.display_rank());
        assert_eq!(
            stats,
            vec![StatType::Energy, StatType::Combat, StatType::MultiPower, StatType::AnyPower]
        );
    }
}
