//! Import outcome reporting.

use serde::{Deserialize, Serialize};

use crate::core::CommitError;

/// One card the commit loop could not add.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitFailure {
    pub name: String,
    pub error: CommitError,
}

impl std::fmt::Display for CommitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.error)
    }
}

/// Result of a committed import.
///
/// Per-card failures don't undo earlier adds; `added` counts the cards that
/// were confirmed in the live deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Cards confirmed added.
    pub added: usize,

    /// Characters and locations dropped as repeats, while planning or
    /// because the live deck already held them at commit time.
    pub skipped: usize,

    /// Cards that failed to commit, in commit order.
    pub failures: Vec<CommitFailure>,
}

impl ImportReport {
    /// True when every planned card landed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Success line followed by one line per failure.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        std::iter::once(format!("Successfully imported {} card(s)", self.added))
            .chain(self.failures.iter().map(ToString::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let report = ImportReport {
            added: 3,
            skipped: 1,
            failures: vec![CommitFailure {
                name: "Zeus".into(),
                error: CommitError::CapReached {
                    cap: 4,
                    noun: "characters".into(),
                },
            }],
        };
        assert!(!report.is_clean());
        assert_eq!(
            report.messages(),
            vec![
                "Successfully imported 3 card(s)".to_string(),
                "Zeus: Cannot add more than 4 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_default_is_clean() {
        let report = ImportReport::default();
        assert!(report.is_clean());
        assert_eq!(report.messages(), vec!["Successfully imported 0 card(s)".to_string()]);
    }
}
