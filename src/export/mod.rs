//! Deck export: the import document shape plus summary figures.

pub mod document;
pub mod summary;

pub use document::{descriptor_line, export_deck, ExportCards, ExportDocument, GroupedLines};
pub use summary::DeckSummary;
