//! Legality validator.
//!
//! `Validator::validate` is a pure function of (deck, catalog): it builds a
//! `DeckContext` once, runs every rule in order and returns all findings.
//! Nothing short-circuits and nothing is remembered between calls.
//!
//! ## Rules
//!
//! 1. `character_count`: exactly 4 characters
//! 2. `mission_count` / `mission_set`: exactly 7 missions from one set
//! 3. `location_count`: at most 1 location
//! 4. `threat_level`: character threat at most 76
//! 5. `deck_size`: draw pile of 51, or 56 with events
//! 6. `angry_mob_limit` / `unusable_special`: special card owners
//! 7. `unusable_event`: event mission sets
//! 8. `one_per_deck_violation`
//! 9. `unusable_power` / `unusable_universe`: stat requirements

pub mod context;
pub mod error;
pub mod rules;

use tracing::debug;

use crate::cards::Catalog;
use crate::core::DeckRules;
use crate::deck::DeckCard;

pub use context::{ContextCard, DeckContext};
pub use error::{RuleId, ValidationError};
pub use rules::{
    standard_rules, CharacterCountRule, DeckRule, DeckSizeRule, EventMissionRule, LocationCountRule,
    MissionRule, OnePerDeckRule, SpecialCardRule, StatRequirementRule, ThreatRule,
};

/// Runs the rule set against decks.
pub struct Validator {
    rules: DeckRules,
    checks: Vec<Box<dyn DeckRule + Send + Sync>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DeckRules::default())
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.checks.iter().map(|c| c.name()).collect();
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .field("checks", &names)
            .finish()
    }
}

impl Validator {
    /// Validator with the standard rule set.
    #[must_use]
    pub fn new(rules: DeckRules) -> Self {
        Self {
            rules,
            checks: standard_rules(),
        }
    }

    /// Append a rule after the standard set.
    #[must_use]
    pub fn with_rule(mut self, rule: impl DeckRule + Send + Sync + 'static) -> Self {
        self.checks.push(Box::new(rule));
        self
    }

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Every violation in the deck, in rule order.
    #[must_use]
    pub fn validate(&self, cards: &[DeckCard], catalog: &Catalog) -> Vec<ValidationError> {
        let ctx = DeckContext::new(cards, catalog, &self.rules);
        let mut errors = Vec::new();
        for check in &self.checks {
            check.check(&ctx, &mut errors);
        }
        debug!(cards = cards.len(), errors = errors.len(), "Validated deck");
        errors
    }

    /// Whether the deck passes every rule.
    #[must_use]
    pub fn is_legal(&self, cards: &[DeckCard], catalog: &Catalog) -> bool {
        self.validate(cards, catalog).is_empty()
    }
}

/// Validate with tournament rules.
#[must_use]
pub fn validate_deck(cards: &[DeckCard], catalog: &Catalog) -> Vec<ValidationError> {
    Validator::default().validate(cards, catalog)
}
