//! Core types shared by every stage of the pipeline.
//!
//! - `Category`: the twelve card categories and their spellings
//! - `StatType`, `CharacterStats`, `StatRequirement`: stat vocabulary
//! - `DeckRules`, `ImportConfig`: configuration
//! - `CatalogError`, `ImportError`, `CommitError`: error types

pub mod category;
pub mod config;
pub mod error;
pub mod stat;

pub use category::Category;
pub use config::{DeckRules, ImportConfig};
pub use error::{CatalogError, CatalogResult, CommitError, ImportError, ImportResult};
pub use stat::{CharacterStats, StatRequirement, StatType};
