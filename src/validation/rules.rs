//! The nine deck construction rules.
//!
//! Each rule reads a `DeckContext` and appends its findings. Rules never
//! stop early and never depend on each other's output.

use crate::core::{Category, StatRequirement, StatType};

use super::context::DeckContext;
use super::error::{RuleId, ValidationError};

/// A deck construction rule.
pub trait DeckRule {
    /// Short name, for logging.
    fn name(&self) -> &'static str;

    /// Append every violation found in the deck.
    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>);
}

/// Rule 1: exactly four characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharacterCountRule;

impl DeckRule for CharacterCountRule {
    fn name(&self) -> &'static str {
        "character count"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let required = ctx.rules().required_characters;
        let found = ctx.count(Category::Character);
        if found != required {
            out.push(ValidationError::new(
                RuleId::CharacterCount,
                format!("Deck must have exactly {required} characters (found {found})"),
            ));
        }
    }
}

/// Rule 2: exactly seven missions, all from one mission set.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissionRule;

impl DeckRule for MissionRule {
    fn name(&self) -> &'static str {
        "missions"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let required = ctx.rules().required_missions;
        let found = ctx.count(Category::Mission);
        if found != required {
            out.push(ValidationError::new(
                RuleId::MissionCount,
                format!("Deck must have exactly {required} mission cards (found {found})"),
            ));
            return;
        }

        let sets = ctx.mission_sets();
        if sets.len() > 1 {
            let listed = sets.into_iter().collect::<Vec<_>>().join(", ");
            out.push(ValidationError::new(
                RuleId::MissionSet,
                format!("All mission cards must be from the same mission set (found: {listed})"),
            ));
        }
    }
}

/// Rule 3: at most one location.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationCountRule;

impl DeckRule for LocationCountRule {
    fn name(&self) -> &'static str {
        "location count"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let max = ctx.rules().max_locations;
        let found = ctx.count(Category::Location);
        if found > max {
            out.push(ValidationError::new(
                RuleId::LocationCount,
                format!("Deck may have at most {max} location (found {found})"),
            ));
        }
    }
}

/// Rule 4: summed character threat within the ceiling.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreatRule;

impl DeckRule for ThreatRule {
    fn name(&self) -> &'static str {
        "threat"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let max = ctx.rules().max_threat;
        let total: i64 = ctx
            .known_in(Category::Character)
            .map(|(card, entry)| entry.threat_level() * i64::from(card.quantity))
            .sum();
        if total > max {
            out.push(ValidationError::new(
                RuleId::ThreatLevel,
                format!("Deck threat level must be {max} or less (found {total})"),
            ));
        }
    }
}

/// Rule 5: draw pile minimum, higher when the deck holds events.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckSizeRule;

impl DeckRule for DeckSizeRule {
    fn name(&self) -> &'static str {
        "deck size"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let required = ctx.rules().draw_pile_minimum(ctx.has_events());
        let found = ctx.draw_pile_size();
        if found < required {
            out.push(ValidationError::new(
                RuleId::DeckSize,
                format!("Deck must have at least {required} cards in draw pile (found {found})"),
            ));
        }
    }
}

/// Rule 6: specials need their owning character; one Angry Mob at most.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpecialCardRule;

impl DeckRule for SpecialCardRule {
    fn name(&self) -> &'static str {
        "special cards"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let rules = ctx.rules();
        let mob = rules.angry_mob.as_str();

        let mob_count: u32 = ctx
            .known_in(Category::Character)
            .filter(|(_, entry)| entry.name.trim().starts_with(mob))
            .map(|(card, _)| card.quantity)
            .sum();
        if mob_count > 1 {
            out.push(ValidationError::new(
                RuleId::AngryMobLimit,
                format!("Only one \"{mob}\" character is allowed per deck"),
            ));
        }

        let names = ctx.character_names();
        let mobs: Vec<&str> = names.iter().copied().filter(|n| n.starts_with(mob)).collect();

        for (_, special) in ctx.known_in(Category::Special) {
            let Some(owner) = special.details.owner() else {
                continue;
            };
            if owner == rules.any_character {
                continue;
            }

            let card = special.name.trim();
            if owner.starts_with(mob) {
                if mobs.is_empty() {
                    out.push(ValidationError::new(
                        RuleId::UnusableSpecial,
                        format!("\"{card}\" requires an \"{mob}\" character in your team"),
                    ));
                } else if let Some((_, subtype)) = owner.split_once(':') {
                    let subtype = subtype.trim();
                    if !mobs.iter().any(|m| m.contains(subtype)) {
                        out.push(ValidationError::new(
                            RuleId::UnusableSpecial,
                            format!("\"{card}\" requires an \"{mob}: {subtype}\" character in your team"),
                        ));
                    }
                }
            } else if !names.contains(&owner) {
                out.push(ValidationError::new(
                    RuleId::UnusableSpecial,
                    format!("\"{card}\" requires character \"{owner}\" in your team"),
                ));
            }
        }
    }
}

/// Rule 7: events need their mission set among the deck's missions.
///
/// Skipped when the deck has no missions at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventMissionRule;

impl DeckRule for EventMissionRule {
    fn name(&self) -> &'static str {
        "event mission sets"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let sets = ctx.mission_sets();
        // A deck without missions is already reported by the mission rule.
        if sets.is_empty() {
            return;
        }
        for (_, event) in ctx.known_in(Category::Event) {
            let Some(required) = event.mission_set() else {
                continue;
            };
            if required == ctx.rules().any_mission || sets.contains(required) {
                continue;
            }
            out.push(ValidationError::new(
                RuleId::UnusableEvent,
                format!(
                    "\"{}\" requires mission set \"{required}\" in your deck",
                    event.name.trim()
                ),
            ));
        }
    }
}

/// Rule 8: one-per-deck cards appear at most once.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePerDeckRule;

impl DeckRule for OnePerDeckRule {
    fn name(&self) -> &'static str {
        "one per deck"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        for card in ctx.cards() {
            let Some(entry) = card.entry else {
                continue;
            };
            if entry.is_one_per_deck() && card.quantity > 1 {
                out.push(ValidationError::new(
                    RuleId::OnePerDeckViolation,
                    format!(
                        "\"{}\" is limited to one per deck (found {})",
                        entry.name.trim(),
                        card.quantity
                    ),
                ));
            }
        }
    }
}

/// Rule 9: power and universe requirements met by some character.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatRequirementRule;

impl DeckRule for StatRequirementRule {
    fn name(&self) -> &'static str {
        "stat requirements"
    }

    fn check(&self, ctx: &DeckContext<'_>, out: &mut Vec<ValidationError>) {
        let team = ctx.character_stats();

        for (_, power) in ctx.known_in(Category::Power) {
            let Some((value, power_type)) = power.details.power() else {
                continue;
            };
            if value <= 0 || power_type.is_empty() {
                continue;
            }
            // Unknown power types read as a zero stat.
            let usable = match StatType::parse(power_type) {
                Some(stat) => {
                    let requirement = StatRequirement::new(value, stat);
                    team.iter().any(|stats| requirement.is_met_by(stats))
                }
                None => false,
            };
            if !usable {
                out.push(ValidationError::new(
                    RuleId::UnusablePower,
                    format!(
                        "\"{}\" (Power Card) requires a character with {value}+ {power_type}",
                        power.name.trim()
                    ),
                ));
            }
        }

        for card in ctx.cards().filter(|c| c.category.is_universe()) {
            let Some(entry) = card.entry else {
                continue;
            };
            let Some(requirement) = entry.to_use().and_then(StatRequirement::parse_to_use) else {
                continue;
            };
            if !team.iter().any(|stats| requirement.is_met_by(stats)) {
                out.push(ValidationError::new(
                    RuleId::UnusableUniverse,
                    format!(
                        "\"{}\" (Universe Card) requires a character with {requirement}",
                        entry.name.trim()
                    ),
                ));
            }
        }
    }
}

/// The standard rule set, in evaluation order.
#[must_use]
pub fn standard_rules() -> Vec<Box<dyn DeckRule + Send + Sync>> {
    vec![
        Box::new(CharacterCountRule),
        Box::new(MissionRule),
        Box::new(LocationCountRule),
        Box::new(ThreatRule),
        Box::new(DeckSizeRule),
        Box::new(SpecialCardRule),
        Box::new(EventMissionRule),
        Box::new(OnePerDeckRule),
        Box::new(StatRequirementRule),
    ]
}
