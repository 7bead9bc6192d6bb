//! Catalog sources and the loaded-catalog session.
//!
//! A `CatalogSource` produces catalog entries; a `CatalogSession` owns the
//! current `Catalog` and refreshes it from the source. Imports call
//! `CatalogSession::ensure_loaded` before resolving anything: an empty
//! catalog gets exactly one reload and a settle pause before the import
//! fails.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::definition::CardDefinition;
use super::registry::Catalog;
use crate::core::{CatalogError, CatalogResult};

/// Anything that can produce the full set of catalog entries.
pub trait CatalogSource {
    /// Load every entry. Called once at startup and again on reload.
    fn load(&mut self) -> CatalogResult<Vec<CardDefinition>>;
}

/// Entries held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogSource {
    entries: Vec<CardDefinition>,
}

impl StaticCatalogSource {
    #[must_use]
    pub fn new(entries: Vec<CardDefinition>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&mut self) -> CatalogResult<Vec<CardDefinition>> {
        Ok(self.entries.clone())
    }
}

/// Top-level shape of a catalog file: a bare array, or `{ "cards": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Entries(Vec<CardDefinition>),
    Wrapped { cards: Vec<CardDefinition> },
}

/// Parse catalog JSON text.
pub fn parse_catalog_json(text: &str) -> CatalogResult<Vec<CardDefinition>> {
    let file: CatalogFile = serde_json::from_str(text)?;
    Ok(match file {
        CatalogFile::Entries(cards) | CatalogFile::Wrapped { cards } => cards,
    })
}

/// Entries read from a JSON file on every load.
#[derive(Clone, Debug)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&mut self) -> CatalogResult<Vec<CardDefinition>> {
        debug!("Reading catalog from {}", self.path.display());
        let text = fs::read_to_string(&self.path)?;
        parse_catalog_json(&text)
    }
}

/// The currently loaded catalog, plus the source it reloads from.
pub struct CatalogSession<S> {
    source: S,
    catalog: Catalog,
    reload_wait: Duration,
}

impl<S: CatalogSource> CatalogSession<S> {
    /// Create a session with an empty catalog. Nothing is loaded until
    /// `load` or `ensure_loaded` runs.
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: Catalog::new(),
            reload_wait: Duration::from_millis(1000),
        }
    }

    /// Set the pause taken after a reload.
    #[must_use]
    pub fn with_reload_wait(mut self, wait: Duration) -> Self {
        self.reload_wait = wait;
        self
    }

    /// Replace the catalog with a fresh load from the source.
    pub fn load(&mut self) -> CatalogResult<&Catalog> {
        let entries = self.source.load()?;
        self.catalog = Catalog::from_entries(entries)?;
        info!(cards = self.catalog.len(), "Card catalog loaded");
        Ok(&self.catalog)
    }

    /// Return the catalog, reloading once if it is empty.
    ///
    /// Fails with `CatalogError::Empty` when the catalog is still empty after
    /// the reload and pause, or with the reload's own error.
    pub fn ensure_loaded(&mut self) -> CatalogResult<&Catalog> {
        if !self.catalog.is_empty() {
            return Ok(&self.catalog);
        }

        warn!("Card catalog is empty, reloading");
        self.load()?;
        thread::sleep(self.reload_wait);

        if self.catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(&self.catalog)
    }

    /// The current catalog, possibly empty.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
