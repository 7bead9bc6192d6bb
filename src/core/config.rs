//! Deck construction and import configuration.
//!
//! - `DeckRules`: constants and wildcard names used by the legality rules
//! - `ImportConfig`: import pipeline knobs (exempt rules, commit caps,
//!   settle pause, error report limit)
//!
//! Both default to the tournament values. Tests and tools override single
//! fields through the `with_*` builders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::validation::RuleId;

/// Construction rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Exact number of character cards.
    pub required_characters: u32,

    /// Exact number of mission cards.
    pub required_missions: u32,

    /// Maximum number of location cards.
    pub max_locations: u32,

    /// Maximum summed character threat.
    pub max_threat: i64,

    /// Minimum draw pile size when the deck holds no events.
    pub min_draw_pile: u32,

    /// Minimum draw pile size when the deck holds at least one event.
    pub min_draw_pile_with_events: u32,

    /// Special card owner that any team satisfies.
    pub any_character: String,

    /// Event mission set that any deck satisfies.
    pub any_mission: String,

    /// Name prefix shared by the Angry Mob character family.
    pub angry_mob: String,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            required_characters: 4,
            required_missions: 7,
            max_locations: 1,
            max_threat: 76,
            min_draw_pile: 51,
            min_draw_pile_with_events: 56,
            any_character: "Any Character".to_string(),
            any_mission: "Any-Mission".to_string(),
            angry_mob: "Angry Mob".to_string(),
        }
    }
}

impl DeckRules {
    /// Tournament rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threat ceiling.
    #[must_use]
    pub fn with_max_threat(mut self, max_threat: i64) -> Self {
        self.max_threat = max_threat;
        self
    }

    /// Set both draw pile minimums.
    #[must_use]
    pub fn with_draw_pile(mut self, without_events: u32, with_events: u32) -> Self {
        self.min_draw_pile = without_events;
        self.min_draw_pile_with_events = with_events;
        self
    }

    /// Draw pile minimum for a deck with or without events.
    #[must_use]
    pub fn draw_pile_minimum(&self, has_events: bool) -> u32 {
        if has_events {
            self.min_draw_pile_with_events
        } else {
            self.min_draw_pile
        }
    }
}

/// Import pipeline configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Construction rules for the pre-commit check.
    pub rules: DeckRules,

    /// Rules whose failures never block an import. Draw pile size and
    /// threat by default.
    pub exempt_rules: Vec<RuleId>,

    /// Commit-time cap on character entries in the live deck.
    pub max_characters: usize,

    /// Commit-time cap on location entries in the live deck.
    pub max_locations: usize,

    /// Pause after each add before confirming it landed.
    pub commit_settle: Duration,

    /// How many unresolved names an error message lists by name.
    pub unresolved_report_limit: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            rules: DeckRules::default(),
            exempt_rules: vec![RuleId::DeckSize, RuleId::ThreatLevel],
            max_characters: 4,
            max_locations: 1,
            commit_settle: Duration::from_millis(100),
            unresolved_report_limit: 10,
        }
    }
}

impl ImportConfig {
    /// Default import configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with no settle pause, for tests and batch tools.
    #[must_use]
    pub fn immediate() -> Self {
        Self::default().with_commit_settle(Duration::ZERO)
    }

    /// Replace the construction rules.
    #[must_use]
    pub fn with_rules(mut self, rules: DeckRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the exempt rule set.
    #[must_use]
    pub fn with_exempt_rules(mut self, rules: impl IntoIterator<Item = RuleId>) -> Self {
        self.exempt_rules = rules.into_iter().collect();
        self
    }

    /// Set the per-add settle pause.
    #[must_use]
    pub fn with_commit_settle(mut self, settle: Duration) -> Self {
        self.commit_settle = settle;
        self
    }

    /// Set the number of unresolved names listed in errors.
    #[must_use]
    pub fn with_unresolved_report_limit(mut self, limit: usize) -> Self {
        self.unresolved_report_limit = limit;
        self
    }

    /// Whether a rule's failures are ignored by the pre-commit check.
    #[must_use]
    pub fn is_exempt(&self, rule: RuleId) -> bool {
        self.exempt_rules.contains(&rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_rules_defaults() {
        let rules = DeckRules::default();
        assert_eq!(rules.required_characters, 4);
        assert_eq!(rules.required_missions, 7);
        assert_eq!(rules.max_locations, 1);
        assert_eq!(rules.max_threat, 76);
        assert_eq!(rules.draw_pile_minimum(false), 51);
        assert_eq!(rules.draw_pile_minimum(true), 56);
    }

    #[test]
    fn test_deck_rules_builder() {
        let rules = DeckRules::new().with_max_threat(90).with_draw_pile(40, 45);
        assert_eq!(rules.max_threat, 90);
        assert_eq!(rules.draw_pile_minimum(false), 40);
        assert_eq!(rules.draw_pile_minimum(true), 45);
    }

    #[test]
    fn test_import_config_exemptions() {
        let config = ImportConfig::default();
        assert!(config.is_exempt(RuleId::DeckSize));
        assert!(config.is_exempt(RuleId::ThreatLevel));
        assert!(!config.is_exempt(RuleId::CharacterCount));

        let strict = config.with_exempt_rules([]);
        assert!(!strict.is_exempt(RuleId::DeckSize));
    }

    #[test]
    fn test_immediate_has_no_pause() {
        let config = ImportConfig::immediate();
        assert_eq!(config.commit_settle, Duration::ZERO);
        assert_eq!(config.unresolved_report_limit, 10);
    }

    #[test]
    fn test_import_config_serde() {
        let config = ImportConfig::immediate().with_unresolved_report_limit(3);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"deck_size\""));
        let back: ImportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
