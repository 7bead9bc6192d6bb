use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Failures while loading or indexing the card catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate card identifier '{0}'")]
    DuplicateId(String),

    #[error("Lookup key '{key}' is claimed by both '{existing}' and '{incoming}'")]
    AmbiguousKey {
        key: String,
        existing: String,
        incoming: String,
    },

    #[error("Card data not loaded. Please refresh the page and try again.")]
    Empty,
}

/// Failures that abort an import before any card is committed.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid import format: {0}")]
    InvalidFormat(String),

    #[error("No cards found in import data")]
    NoCards,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{}", describe_unresolved(.names, .shown))]
    Unresolved { names: Vec<String>, shown: usize },

    #[error("{}", describe_rejection(.0))]
    Rejected(Vec<ValidationError>),
}

/// A single add that failed at commit time.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CommitError {
    #[error("{0}")]
    Refused(String),

    #[error("Cannot add more than {cap} {noun}")]
    CapReached { cap: usize, noun: String },

    #[error("Card was not added to deck")]
    NotApplied,
}

fn describe_unresolved(names: &[String], shown: &usize) -> String {
    let listed = names
        .iter()
        .take(*shown)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let mut message = format!("Could not find {} card(s): {}", names.len(), listed);
    if names.len() > *shown {
        message.push_str(&format!(" (and {} more)", names.len() - *shown));
    }
    message
}

fn describe_rejection(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
pub type ImportResult<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleId;

    #[test]
    fn test_unresolved_message_truncates() {
        let names: Vec<String> = (1..=12).map(|i| format!("Card {i}")).collect();
        let err = ImportError::Unresolved { names, shown: 10 };
        let message = err.to_string();
        assert!(message.starts_with("Could not find 12 card(s): Card 1, Card 2"));
        assert!(message.contains("Card 10"));
        assert!(!message.contains("Card 11"));
        assert!(message.ends_with("(and 2 more)"));
    }

    #[test]
    fn test_unresolved_message_short_list() {
        let err = ImportError::Unresolved {
            names: vec!["Zeus".into()],
            shown: 10,
        };
        assert_eq!(err.to_string(), "Could not find 1 card(s): Zeus");
    }

    #[test]
    fn test_rejection_joins_messages() {
        let err = ImportError::Rejected(vec![
            ValidationError::new(RuleId::CharacterCount, "first"),
            ValidationError::new(RuleId::MissionCount, "second"),
        ]);
        assert_eq!(err.to_string(), "first; second");
    }

    #[test]
    fn test_commit_error_messages() {
        let err = CommitError::CapReached {
            cap: 4,
            noun: "characters".into(),
        };
        assert_eq!(err.to_string(), "Cannot add more than 4 characters");

        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], "cap_reached");
        assert_eq!(serde_json::from_value::<CommitError>(value).unwrap(), err);
    }

    #[test]
    fn test_catalog_error_wraps_transparently() {
        let err: ImportError = CatalogError::Empty.into();
        assert_eq!(
            err.to_string(),
            "Card data not loaded. Please refresh the page and try again."
        );
    }
}
