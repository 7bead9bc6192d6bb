//! Lookup policies, one per category family.
//!
//! - `NameMatcher`: first entry of the category with the same trimmed name
//! - `PowerMatcher`: value and type parsed from `<value> - <type>`, falling
//!   back to the name
//! - `AttributeMatcher`: name plus attribute-subset match, for the four
//!   categories whose entries share names

use crate::cards::{CardDefinition, Catalog};
use crate::core::Category;
use crate::parser::{split_power_name, CardDescriptor};

/// Finds the catalog entry a descriptor refers to.
pub trait CardMatcher: Sync {
    /// First matching entry in catalog order, or `None`.
    fn find<'c>(&self, descriptor: &CardDescriptor, catalog: &'c Catalog) -> Option<&'c CardDefinition>;
}

/// Exact trimmed-name lookup within a category.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameMatcher;

impl CardMatcher for NameMatcher {
    fn find<'c>(&self, descriptor: &CardDescriptor, catalog: &'c Catalog) -> Option<&'c CardDefinition> {
        catalog
            .in_category(descriptor.category)
            .find(|card| card.is_named(&descriptor.name))
    }
}

/// Power card lookup on parsed value and type.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerMatcher;

impl CardMatcher for PowerMatcher {
    fn find<'c>(&self, descriptor: &CardDescriptor, catalog: &'c Catalog) -> Option<&'c CardDefinition> {
        if let Some((value, power_type)) = split_power_name(&descriptor.name) {
            let found = catalog
                .in_category(Category::Power)
                .find(|card| card.details.power() == Some((value, power_type)));
            if found.is_some() {
                return found;
            }
        }
        NameMatcher.find(descriptor, catalog)
    }
}

/// Name plus attribute-subset lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeMatcher;

impl CardMatcher for AttributeMatcher {
    fn find<'c>(&self, descriptor: &CardDescriptor, catalog: &'c Catalog) -> Option<&'c CardDefinition> {
        let supplied = descriptor.attributes.values();
        catalog
            .in_category(descriptor.category)
            .filter(|card| card.is_named(&descriptor.name))
            .find(|card| attributes_match(&supplied, &card.disambiguators()))
    }
}

/// Matcher used for a category.
#[must_use]
pub fn matcher_for(category: Category) -> &'static dyn CardMatcher {
    match category {
        Category::Teamwork
        | Category::AllyUniverse
        | Category::Training
        | Category::BasicUniverse => &AttributeMatcher,
        Category::Power => &PowerMatcher,
        _ => &NameMatcher,
    }
}

/// Attribute-subset rule.
///
/// Every supplied value must equal the candidate's value at the same
/// position, after trimming. Unsupplied positions match anything, except
/// when nothing at all is supplied: then the candidate must have no
/// attributes either. Blank strings count as absent on both sides.
#[must_use]
pub fn attributes_match(supplied: &[Option<&str>], candidate: &[Option<&str>]) -> bool {
    if supplied.iter().all(|v| present(v).is_none()) {
        return candidate.iter().all(|v| present(v).is_none());
    }

    supplied.iter().enumerate().all(|(i, wanted)| match present(wanted) {
        None => true,
        Some(wanted) => candidate.get(i).and_then(|v| present(v)) == Some(wanted),
    })
}

fn present<'a>(value: &Option<&'a str>) -> Option<&'a str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
