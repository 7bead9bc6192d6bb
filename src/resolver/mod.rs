//! Card resolver: descriptors to catalog identifiers.
//!
//! Each category dispatches to a `CardMatcher`. Resolution never errors; a
//! descriptor without a match becomes `Resolution::Unresolved`, which the
//! import assembler aggregates into a single report.
//!
//! The `find_*` helpers are the per-category lookups expressed as plain
//! arguments, for callers that hold attributes rather than descriptors.

pub mod matcher;

use tracing::debug;

use crate::cards::{CardDefinition, CardId, Catalog};
use crate::core::Category;
use crate::parser::{CardDescriptor, DescriptorAttributes};

pub use matcher::{attributes_match, matcher_for, AttributeMatcher, CardMatcher, NameMatcher, PowerMatcher};

/// Outcome of resolving one descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved(CardId),
    Unresolved(String),
}

impl Resolution {
    #[must_use]
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Resolution::Resolved(id) => Some(id),
            Resolution::Unresolved(_) => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// A descriptor paired with the entry it resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCard {
    pub category: Category,
    pub card_id: CardId,
    pub name: String,
}

/// Result of resolving a whole batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedBatch {
    /// Resolved cards, in input order.
    pub resolved: Vec<ResolvedCard>,
    /// Names that matched nothing, in input order.
    pub unresolved: Vec<String>,
}

/// Resolves descriptors against a catalog.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> Resolver<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// The matching catalog entry, if any.
    #[must_use]
    pub fn find(&self, descriptor: &CardDescriptor) -> Option<&'c CardDefinition> {
        matcher_for(descriptor.category).find(descriptor, self.catalog)
    }

    /// Resolve one descriptor.
    #[must_use]
    pub fn resolve(&self, descriptor: &CardDescriptor) -> Resolution {
        match self.find(descriptor) {
            Some(card) => {
                debug!(name = %descriptor.name, category = %descriptor.category, card_id = %card.id, "Resolved card");
                Resolution::Resolved(card.id.clone())
            }
            None => {
                debug!(name = %descriptor.name, category = %descriptor.category, "No catalog match");
                Resolution::Unresolved(descriptor.name.clone())
            }
        }
    }

    /// Resolve every descriptor, keeping input order.
    #[must_use]
    pub fn resolve_all(&self, descriptors: &[CardDescriptor]) -> ResolvedBatch {
        let mut batch = ResolvedBatch::default();
        for descriptor in descriptors {
            match self.resolve(descriptor) {
                Resolution::Resolved(card_id) => batch.resolved.push(ResolvedCard {
                    category: descriptor.category,
                    card_id,
                    name: descriptor.name.clone(),
                }),
                Resolution::Unresolved(name) => batch.unresolved.push(name),
            }
        }
        batch
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Generic lookup by category and name. Power names are matched on their
/// parsed value and type.
#[must_use]
pub fn find_card(catalog: &Catalog, category: Category, name: &str) -> Option<CardId> {
    let descriptor = CardDescriptor::named(category, name);
    Resolver::new(catalog).find(&descriptor).map(|card| card.id.clone())
}

/// Teamwork lookup.
#[must_use]
pub fn find_teamwork(catalog: &Catalog, name: &str, followup_attack_types: Option<&str>) -> Option<CardId> {
    let descriptor = CardDescriptor::named(Category::Teamwork, name).with_attributes(
        DescriptorAttributes::Teamwork {
            followup_attack_types: owned(followup_attack_types),
        },
    );
    Resolver::new(catalog).find(&descriptor).map(|card| card.id.clone())
}

/// Ally-universe lookup.
#[must_use]
pub fn find_ally(
    catalog: &Catalog,
    name: &str,
    stat_to_use: Option<&str>,
    stat_type_to_use: Option<&str>,
) -> Option<CardId> {
    let descriptor = CardDescriptor::named(Category::AllyUniverse, name).with_attributes(
        DescriptorAttributes::Ally {
            stat_to_use: owned(stat_to_use),
            stat_type_to_use: owned(stat_type_to_use),
        },
    );
    Resolver::new(catalog).find(&descriptor).map(|card| card.id.clone())
}

/// Training lookup.
#[must_use]
pub fn find_training(
    catalog: &Catalog,
    name: &str,
    type_1: Option<&str>,
    type_2: Option<&str>,
    bonus: Option<&str>,
) -> Option<CardId> {
    let descriptor = CardDescriptor::named(Category::Training, name).with_attributes(
        DescriptorAttributes::Training {
            type_1: owned(type_1),
            type_2: owned(type_2),
            bonus: owned(bonus),
        },
    );
    Resolver::new(catalog).find(&descriptor).map(|card| card.id.clone())
}

/// Basic-universe lookup.
#[must_use]
pub fn find_basic_universe(
    catalog: &Catalog,
    name: &str,
    stat_type: Option<&str>,
    value_to_use: Option<&str>,
    bonus: Option<&str>,
) -> Option<CardId> {
    let descriptor = CardDescriptor::named(Category::BasicUniverse, name).with_attributes(
        DescriptorAttributes::BasicUniverse {
            stat_type: owned(stat_type),
            value_to_use: owned(value_to_use),
            bonus: owned(bonus),
        },
    );
    Resolver::new(catalog).find(&descriptor).map(|card| card.id.clone())
}
