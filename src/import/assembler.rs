//! Import assembler: resolution, duplication policy, pre-commit validation
//! and the per-card commit loop.
//!
//! An import runs in two phases. `plan` is side-effect free: it resolves
//! every descriptor, drops repeated characters and locations, and validates
//! the candidate deck (live deck plus additions). Any unresolved card or any
//! non-exempt violation fails the whole import before anything is written.
//! `commit` then adds each planned card through the `DeckEditor`, pausing
//! to confirm each add landed, and collects per-card failures without
//! stopping.

use std::thread;

use tracing::{debug, info, warn};

use super::report::{CommitFailure, ImportReport};
use crate::cards::{CardId, Catalog};
use crate::core::{Category, CommitError, ImportConfig, ImportError, ImportResult};
use crate::deck::{Deck, DeckEditor};
use crate::parser::CardDescriptor;
use crate::resolver::Resolver;
use crate::validation::Validator;

/// Duplication policy of a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplication {
    /// One deck entry per card; repeats are dropped.
    UniquePerDeck,
    /// Repeats add copies to one deck entry.
    Stackable,
}

impl Duplication {
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Character | Category::Location => Duplication::UniquePerDeck,
            _ => Duplication::Stackable,
        }
    }
}

/// A resolved card waiting to be committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedCard {
    pub category: Category,
    pub card_id: CardId,
    pub name: String,
}

/// Validated set of additions.
#[derive(Clone, Debug, Default)]
pub struct ImportPlan {
    /// Cards to add, one copy each, in document order.
    pub cards: Vec<PlannedCard>,

    /// Repeated characters and locations dropped while planning.
    pub skipped_duplicates: usize,

    /// Live deck plus every planned card.
    pub candidate: Deck,
}

/// Runs imports against one catalog.
#[derive(Debug)]
pub struct DeckImporter<'c> {
    catalog: &'c Catalog,
    config: ImportConfig,
    validator: Validator,
}

impl<'c> DeckImporter<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog, config: ImportConfig) -> Self {
        let validator = Validator::new(config.rules.clone());
        Self {
            catalog,
            config,
            validator,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Resolve, de-duplicate and validate. Writes nothing.
    pub fn plan(&self, descriptors: &[CardDescriptor], live: &Deck) -> ImportResult<ImportPlan> {
        let batch = Resolver::new(self.catalog).resolve_all(descriptors);
        if !batch.unresolved.is_empty() {
            warn!(count = batch.unresolved.len(), "Import has unresolved cards");
            return Err(ImportError::Unresolved {
                names: batch.unresolved,
                shown: self.config.unresolved_report_limit,
            });
        }

        let mut plan = ImportPlan {
            candidate: live.canonical(self.catalog),
            ..ImportPlan::default()
        };
        for card in batch.resolved {
            if Duplication::for_category(card.category) == Duplication::UniquePerDeck
                && plan.candidate.contains(card.category, &card.card_id)
            {
                debug!(name = %card.name, category = %card.category, "Dropping repeated card");
                plan.skipped_duplicates += 1;
                continue;
            }
            plan.candidate.add(card.category, card.card_id.clone(), 1);
            plan.cards.push(PlannedCard {
                category: card.category,
                card_id: card.card_id,
                name: card.name,
            });
        }

        let violations: Vec<_> = self
            .validator
            .validate(&plan.candidate.to_vec(), self.catalog)
            .into_iter()
            .filter(|e| !self.config.is_exempt(e.rule))
            .collect();
        if !violations.is_empty() {
            warn!(count = violations.len(), "Import rejected by deck rules");
            return Err(ImportError::Rejected(violations));
        }

        debug!(cards = plan.cards.len(), skipped = plan.skipped_duplicates, "Import planned");
        Ok(plan)
    }

    /// Add each planned card, one at a time.
    pub fn commit<E: DeckEditor>(&self, plan: &ImportPlan, editor: &mut E) -> ImportReport {
        let mut report = ImportReport {
            skipped: plan.skipped_duplicates,
            ..ImportReport::default()
        };

        for card in &plan.cards {
            match self.commit_one(card, editor) {
                Ok(true) => report.added += 1,
                Ok(false) => report.skipped += 1,
                Err(error) => {
                    warn!(name = %card.name, %error, "Card failed to commit");
                    report.failures.push(CommitFailure {
                        name: card.name.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            added = report.added,
            skipped = report.skipped,
            failed = report.failures.len(),
            "Import committed"
        );
        report
    }

    /// `Ok(false)` when the card was skipped as already present.
    fn commit_one<E: DeckEditor>(&self, card: &PlannedCard, editor: &mut E) -> Result<bool, CommitError> {
        let live = editor.deck().canonical(self.catalog);

        if Duplication::for_category(card.category) == Duplication::UniquePerDeck {
            if live.contains(card.category, &card.card_id) {
                debug!(name = %card.name, "Already in deck, skipping");
                return Ok(false);
            }
            let (cap, noun) = match card.category {
                Category::Character => (self.config.max_characters, "characters"),
                _ => (self.config.max_locations, "location"),
            };
            if live.entries_in(card.category) >= cap {
                return Err(CommitError::CapReached {
                    cap,
                    noun: noun.to_string(),
                });
            }
        }

        let before = live.quantity_of(card.category, &card.card_id);
        editor.add_card(card.category, &card.card_id, &card.name)?;
        thread::sleep(self.config.commit_settle);

        let after = editor
            .deck()
            .canonical(self.catalog)
            .quantity_of(card.category, &card.card_id);
        if after <= before {
            return Err(CommitError::NotApplied);
        }
        Ok(true)
    }

    /// Plan and commit against an editor's live deck.
    pub fn import<E: DeckEditor>(&self, descriptors: &[CardDescriptor], editor: &mut E) -> ImportResult<ImportReport> {
        let plan = self.plan(descriptors, &editor.deck())?;
        Ok(self.commit(&plan, editor))
    }
}
