//! Rule identifiers and validation findings.

use serde::{Deserialize, Serialize};

/// Stable identifier of a construction rule finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    CharacterCount,
    MissionCount,
    MissionSet,
    LocationCount,
    ThreatLevel,
    DeckSize,
    AngryMobLimit,
    UnusableSpecial,
    UnusableEvent,
    OnePerDeckViolation,
    UnusablePower,
    UnusableUniverse,
}

impl RuleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleId::CharacterCount => "character_count",
            RuleId::MissionCount => "mission_count",
            RuleId::MissionSet => "mission_set",
            RuleId::LocationCount => "location_count",
            RuleId::ThreatLevel => "threat_level",
            RuleId::DeckSize => "deck_size",
            RuleId::AngryMobLimit => "angry_mob_limit",
            RuleId::UnusableSpecial => "unusable_special",
            RuleId::UnusableEvent => "unusable_event",
            RuleId::OnePerDeckViolation => "one_per_deck_violation",
            RuleId::UnusablePower => "unusable_power",
            RuleId::UnusableUniverse => "unusable_universe",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule violation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub rule: RuleId,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}
