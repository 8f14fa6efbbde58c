//! Practice mode: a linear read-through with no scoring.
//!
//! `Reading -> Reading -> ... -> Done`. The first line is shown on start and
//! each advance reveals the next one; advancing past the last line finishes.

use std::sync::Arc;

use colloquy_foundation::{Dialogue, Mode};
use tracing::debug;

use crate::engine::{Event, ModeEngine, WalkState};

/// Sequential reveal engine.
#[derive(Clone, Debug)]
pub struct PracticeEngine {
    dialogue: Arc<Dialogue>,
    state: WalkState,
}

impl PracticeEngine {
    /// Creates an engine over `dialogue`. Call [`ModeEngine::start`] before use.
    #[must_use]
    pub fn new(dialogue: Arc<Dialogue>) -> Self {
        Self {
            dialogue,
            state: WalkState::default(),
        }
    }
}

impl ModeEngine for PracticeEngine {
    fn mode(&self) -> Mode {
        Mode::Practice
    }

    fn dialogue(&self) -> &Dialogue {
        &self.dialogue
    }

    fn state(&self) -> &WalkState {
        &self.state
    }

    fn start(&mut self) -> Vec<Event> {
        self.state = WalkState::default();
        self.state.reveal(0).into_iter().collect()
    }

    fn advance(&mut self) -> Vec<Event> {
        if self.state.done || self.state.revealed.is_empty() {
            return Vec::new();
        }

        let next = self.state.cursor + 1;
        if next < self.dialogue.len() {
            self.state.cursor = next;
            return self.state.reveal(next).into_iter().collect();
        }

        self.state.done = true;
        debug!(dialogue = self.dialogue.id(), "practice read-through finished");
        vec![Event::Completed { score: None }]
    }

    fn score(&self) -> Option<u8> {
        None
    }
}
