//! Deck import pipeline.
//!
//! `import_deck` is the full flow for a JSON import document:
//!
//! 1. read the document (input-shape errors fail immediately)
//! 2. make sure the catalog is loaded (one reload before failing)
//! 3. parse every line into a descriptor
//! 4. plan: resolve, drop repeats, validate the candidate deck
//! 5. commit card by card through the `DeckEditor`

pub mod assembler;
pub mod report;

use tracing::info;

use crate::cards::{CatalogSession, CatalogSource};
use crate::core::{ImportConfig, ImportResult};
use crate::deck::DeckEditor;
use crate::parser::parse_document;

pub use assembler::{DeckImporter, Duplication, ImportPlan, PlannedCard};
pub use report::{CommitFailure, ImportReport};

/// Import a JSON document into the editor's deck.
pub fn import_deck<S, E>(
    session: &mut CatalogSession<S>,
    document: &str,
    editor: &mut E,
    config: ImportConfig,
) -> ImportResult<ImportReport>
where
    S: CatalogSource,
    E: DeckEditor,
{
    let descriptors = parse_document(document)?;
    let catalog = session.ensure_loaded()?;
    info!(lines = descriptors.len(), "Importing deck");

    DeckImporter::new(catalog, config).import(&descriptors, editor)
}
