//! Structured card descriptors.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::Category;

/// Attributes recovered from an import line. Name-only categories carry none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DescriptorAttributes {
    #[default]
    None,
    Teamwork {
        followup_attack_types: Option<String>,
    },
    Ally {
        stat_to_use: Option<String>,
        stat_type_to_use: Option<String>,
    },
    Training {
        type_1: Option<String>,
        type_2: Option<String>,
        bonus: Option<String>,
    },
    BasicUniverse {
        stat_type: Option<String>,
        value_to_use: Option<String>,
        bonus: Option<String>,
    },
}

impl DescriptorAttributes {
    /// Empty attributes for a category's grammar.
    #[must_use]
    pub fn empty_for(category: Category) -> Self {
        match category {
            Category::Teamwork => DescriptorAttributes::Teamwork {
                followup_attack_types: None,
            },
            Category::AllyUniverse => DescriptorAttributes::Ally {
                stat_to_use: None,
                stat_type_to_use: None,
            },
            Category::Training => DescriptorAttributes::Training {
                type_1: None,
                type_2: None,
                bonus: None,
            },
            Category::BasicUniverse => DescriptorAttributes::BasicUniverse {
                stat_type: None,
                value_to_use: None,
                bonus: None,
            },
            _ => DescriptorAttributes::None,
        }
    }

    /// Attribute values in line order, matching
    /// `CardDetails::disambiguators` of the same category.
    #[must_use]
    pub fn values(&self) -> SmallVec<[Option<&str>; 3]> {
        match self {
            DescriptorAttributes::None => SmallVec::new(),
            DescriptorAttributes::Teamwork {
                followup_attack_types,
            } => smallvec![followup_attack_types.as_deref()],
            DescriptorAttributes::Ally {
                stat_to_use,
                stat_type_to_use,
            } => smallvec![stat_to_use.as_deref(), stat_type_to_use.as_deref()],
            DescriptorAttributes::Training {
                type_1,
                type_2,
                bonus,
            } => smallvec![type_1.as_deref(), type_2.as_deref(), bonus.as_deref()],
            DescriptorAttributes::BasicUniverse {
                stat_type,
                value_to_use,
                bonus,
            } => smallvec![stat_type.as_deref(), value_to_use.as_deref(), bonus.as_deref()],
        }
    }

    /// True when no attribute was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(Option::is_none)
    }
}

/// A parsed import line: category, card name and optional attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub category: Category,
    pub name: String,
    pub attributes: DescriptorAttributes,
}

impl CardDescriptor {
    /// Descriptor carrying only a name.
    #[must_use]
    pub fn named(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            attributes: DescriptorAttributes::empty_for(category),
        }
    }

    /// Replace the attributes (builder pattern).
    #[must_use]
    pub fn with_attributes(mut self, attributes: DescriptorAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl std::fmt::Display for CardDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}
