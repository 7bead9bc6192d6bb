//! Descriptor parser: import documents to structured card descriptors.
//!
//! - `document`: reads the JSON import document into category-tagged lines
//! - `grammar`: per-category line grammars
//! - `descriptor`: the `CardDescriptor` produced for each line

pub mod descriptor;
pub mod document;
pub mod grammar;

pub use descriptor::{CardDescriptor, DescriptorAttributes};
pub use document::{read_import_document, read_import_value, section_key, ImportLine, SectionLayout, SECTIONS};
pub use grammar::{normalize_power_line, parse_line, split_power_name, LineGrammar};

/// Parse every line of an import document.
pub fn parse_document(text: &str) -> crate::core::ImportResult<Vec<CardDescriptor>> {
    Ok(read_import_document(text)?
        .iter()
        .map(|line| parse_line(line.category, &line.text))
        .collect())
}
