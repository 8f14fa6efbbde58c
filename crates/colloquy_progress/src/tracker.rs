//! A learner's ledger bound to the store it is persisted in.

use colloquy_foundation::{Mode, Result};
use tracing::{info, warn};

use crate::identity::LearnerIdentity;
use crate::ledger::{ConversationProgress, ProgressLedger};
use crate::store::ProgressStore;

/// Owns the active learner's ledger and writes it through on every change.
///
/// The in-memory ledger is the source of truth for the session. A failed
/// read starts the learner from an empty ledger; a failed write is reported
/// but the update stays applied.
#[derive(Debug)]
pub struct ProgressTracker<S: ProgressStore> {
    identity: LearnerIdentity,
    ledger: ProgressLedger,
    store: S,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Loads `identity`'s ledger from `store`.
    ///
    /// Stored progress that cannot be read is logged and replaced by an
    /// empty ledger.
    pub fn open(identity: LearnerIdentity, store: S) -> Self {
        let ledger = store.load(&identity.key()).unwrap_or_else(|e| {
            warn!(learner = %identity, error = %e, "progress unreadable, starting empty");
            ProgressLedger::new()
        });
        info!(learner = %identity, dialogues = ledger.len(), "progress loaded");
        Self {
            identity,
            ledger,
            store,
        }
    }

    /// The active learner.
    #[must_use]
    pub fn identity(&self) -> &LearnerIdentity {
        &self.identity
    }

    /// The current ledger.
    #[must_use]
    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Progress for `dialogue_id`.
    #[must_use]
    pub fn get_progress(&self, dialogue_id: &str) -> ConversationProgress {
        self.ledger.get_progress(dialogue_id)
    }

    /// Whether `mode` may be started for `dialogue_id`.
    #[must_use]
    pub fn is_mode_unlocked(&self, dialogue_id: &str, mode: Mode) -> bool {
        self.ledger.is_mode_unlocked(dialogue_id, mode)
    }

    /// Number of completed modes for `dialogue_id`.
    #[must_use]
    pub fn overall_progress(&self, dialogue_id: &str) -> usize {
        self.ledger.overall_progress(dialogue_id)
    }

    /// Records a finished run and persists the ledger.
    ///
    /// # Errors
    ///
    /// Returns the store's error if persisting fails. The ledger keeps the
    /// update either way.
    pub fn complete_mode(
        &mut self,
        dialogue_id: &str,
        mode: Mode,
        score: Option<u8>,
    ) -> Result<()> {
        self.ledger.complete_mode(dialogue_id, mode, score);
        info!(dialogue = dialogue_id, %mode, ?score, "mode completed");

        self.store
            .save(&self.identity.key(), &self.ledger)
            .inspect_err(|e| warn!(learner = %self.identity, error = %e, "progress not saved"))
    }
}
