//! Completion and best score per (dialogue, mode), with unlock gating.
//!
//! ```text
//!   Practice ──completed──► Select ──completed && best == 100──► Structure
//! ```
//!
//! The ledger is a persistent map, so cloning it for persistence is cheap
//! and never observes a half-applied update.

use colloquy_foundation::Mode;
use im::OrdMap;
use serde::{Deserialize, Serialize};

/// Score that marks a select run as mastered.
pub const PERFECT_SCORE: u8 = 100;

/// Progress in one mode of one dialogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeProgress {
    /// Whether the mode counts as completed.
    pub completed: bool,
    /// Best percentage so far; tracked for select mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score: Option<u8>,
}

/// Progress across all three modes of one dialogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationProgress {
    /// Practice mode.
    #[serde(default)]
    pub practice: ModeProgress,
    /// Select mode.
    #[serde(default)]
    pub select: ModeProgress,
    /// Structure mode.
    #[serde(default)]
    pub structure: ModeProgress,
}

impl ConversationProgress {
    /// Progress for `mode`.
    #[must_use]
    pub const fn get(&self, mode: Mode) -> &ModeProgress {
        match mode {
            Mode::Practice => &self.practice,
            Mode::Select => &self.select,
            Mode::Structure => &self.structure,
        }
    }

    fn get_mut(&mut self, mode: Mode) -> &mut ModeProgress {
        match mode {
            Mode::Practice => &mut self.practice,
            Mode::Select => &mut self.select,
            Mode::Structure => &mut self.structure,
        }
    }

    /// Number of completed modes, 0 through 3.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        Mode::ALL
            .iter()
            .filter(|&&mode| self.get(mode).completed)
            .count()
    }
}

/// Progress for every dialogue a learner has touched.
///
/// Entries are created on the first completion and never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressLedger {
    conversations: OrdMap<String, ConversationProgress>,
}

impl ProgressLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress for `dialogue_id`, or all-zero progress if none is recorded.
    #[must_use]
    pub fn get_progress(&self, dialogue_id: &str) -> ConversationProgress {
        self.conversations
            .get(dialogue_id)
            .copied()
            .unwrap_or_default()
    }

    /// Records a finished run of `mode`.
    ///
    /// Select mode counts as completed only at a perfect score, and the flag
    /// reflects the latest run; its best score only ever rises. Practice and
    /// structure are completed by any finished run and carry no best score.
    pub fn complete_mode(&mut self, dialogue_id: &str, mode: Mode, score: Option<u8>) {
        let mut progress = self.get_progress(dialogue_id);
        let entry = progress.get_mut(mode);
        *entry = match mode {
            Mode::Select => {
                let score = score.unwrap_or(0).min(PERFECT_SCORE);
                ModeProgress {
                    completed: score == PERFECT_SCORE,
                    best_score: Some(entry.best_score.unwrap_or(0).max(score)),
                }
            }
            Mode::Practice | Mode::Structure => ModeProgress {
                completed: true,
                best_score: None,
            },
        };
        self.conversations.insert(dialogue_id.to_string(), progress);
    }

    /// Whether `mode` may be started for `dialogue_id`.
    #[must_use]
    pub fn is_mode_unlocked(&self, dialogue_id: &str, mode: Mode) -> bool {
        let progress = self.get_progress(dialogue_id);
        match mode {
            Mode::Practice => true,
            Mode::Select => progress.practice.completed,
            // Both checks are kept so ledgers written under a looser
            // completion rule still gate on a perfect select run.
            Mode::Structure => {
                progress.select.completed && progress.select.best_score == Some(PERFECT_SCORE)
            }
        }
    }

    /// Number of completed modes for `dialogue_id`, 0 through 3.
    #[must_use]
    pub fn overall_progress(&self, dialogue_id: &str) -> usize {
        self.get_progress(dialogue_id).completed_count()
    }

    /// Dialogue ids with recorded progress, in sorted order.
    pub fn dialogue_ids(&self) -> impl Iterator<Item = &str> {
        self.conversations.keys().map(String::as_str)
    }

    /// Number of dialogues with recorded progress.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
