//! Card system: definitions, attributes, catalog and catalog sources.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque catalog identifier
//! - `CardDetails`: Category tag plus category-specific attributes
//! - `CardDefinition`: One catalog entry
//! - `Catalog`: Indexed, load-ordered set of definitions
//! - `CatalogSource` / `CatalogSession`: Loading and reloading the catalog

pub mod attributes;
pub mod definition;
pub mod registry;
pub mod source;

pub use attributes::{CardDetails, Disambiguators};
pub use definition::{CardDefinition, CardId};
pub use registry::Catalog;
pub use source::{
    parse_catalog_json, CatalogSession, CatalogSource, JsonCatalogSource, StaticCatalogSource,
};
