//! # overpower-deck
//!
//! Deck import and legality checking for the Overpower card game.
//!
//! ## Design Principles
//!
//! 1. **Catalog-Driven**: Every card reference resolves to a catalog entry.
//!    Names are display text; identifiers are the only deck currency.
//!
//! 2. **All-or-Nothing Imports**: Parsing, resolution and validation finish
//!    before the first card is committed. An unresolved card or a rule
//!    violation leaves the deck untouched.
//!
//! 3. **Pure Validation**: The validator is a function of (deck, catalog).
//!    It reports every violation and never stops at the first.
//!
//! ## Architecture
//!
//! - **Strategy Dispatch by Category**: line grammars, matchers and the
//!   duplication policy are chosen per category.
//!
//! - **Persistent Decks**: `Deck` is backed by `im::Vector`, so the candidate
//!   deck built during an import is a cheap clone of the live one.
//!
//! ## Modules
//!
//! - `core`: Categories, stat vocabulary, configuration, errors
//! - `cards`: Catalog entries, the indexed catalog, catalog sources
//! - `parser`: Import documents and per-category line grammars
//! - `resolver`: Descriptor to catalog entry matching
//! - `deck`: Deck multiset and the `DeckEditor` seam
//! - `validation`: Deck construction rules
//! - `import`: Import planning and the commit loop
//! - `export`: Export documents and deck summaries

pub mod core;
pub mod cards;
pub mod parser;
pub mod resolver;
pub mod deck;
pub mod validation;
pub mod import;
pub mod export;

// Re-export commonly used types
pub use crate::core::{
    Category, StatType, CharacterStats, StatRequirement,
    DeckRules, ImportConfig,
    CatalogError, ImportError, CommitError, CatalogResult, ImportResult,
};

pub use crate::cards::{
    CardId, CardDefinition, CardDetails, Catalog,
    CatalogSource, CatalogSession, JsonCatalogSource, StaticCatalogSource,
};

pub use crate::parser::{CardDescriptor, DescriptorAttributes, parse_line, parse_document};

pub use crate::resolver::{Resolution, Resolver};

pub use crate::deck::{Deck, DeckCard, DeckEditor, InMemoryDeckEditor};

pub use crate::validation::{DeckRule, RuleId, ValidationError, Validator, validate_deck};

pub use crate::import::{DeckImporter, ImportPlan, ImportReport, import_deck};

pub use crate::export::{DeckSummary, ExportDocument, export_deck};
