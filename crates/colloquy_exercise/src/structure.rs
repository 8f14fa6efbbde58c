//! Structure mode: rebuild each question line from shuffled tiles.
//!
//! Question and gap handling match select mode. Instead of options, the
//! question line is chunked into tiles; the learner places tiles into an
//! arrangement and submits. The arrangement is correct only if its texts
//! joined with single spaces equal the original line exactly, punctuation
//! and case included.

use std::sync::Arc;

use colloquy_foundation::{Dialogue, Mode, SessionRng};
use rand::Rng;
use tracing::debug;

use crate::chunker::chunk;
use crate::config::ExerciseConfig;
use crate::engine::{Event, ModeEngine, Verdict, WalkState, percentage};
use crate::tile::{TileBoard, TileId};
use crate::walk::QuestionWalk;

/// Tile-reordering engine.
#[derive(Clone, Debug)]
pub struct StructureEngine<R: Rng = SessionRng> {
    dialogue: Arc<Dialogue>,
    config: ExerciseConfig,
    rng: R,
    walk: QuestionWalk,
    state: WalkState,
    board: TileBoard,
    correct: usize,
}

impl<R: Rng> StructureEngine<R> {
    /// Creates an engine over `dialogue`. Call [`ModeEngine::start`] before use.
    #[must_use]
    pub fn new(dialogue: Arc<Dialogue>, config: ExerciseConfig, rng: R) -> Self {
        let walk = QuestionWalk::new(&dialogue, config.learner_role);
        Self {
            dialogue,
            config,
            rng,
            walk,
            state: WalkState::default(),
            board: TileBoard::default(),
            correct: 0,
        }
    }

    /// Tiles for the current question.
    #[must_use]
    pub fn board(&self) -> &TileBoard {
        &self.board
    }

    /// Number of questions in this exercise.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.walk.total()
    }

    /// Number of questions answered correctly so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Moves a tile between tray and arrangement. Ignored once submitted.
    pub fn toggle(&mut self, id: &TileId) -> bool {
        self.state.awaiting_answer && self.board.toggle(id)
    }

    /// Replaces the arrangement. Ignored once submitted.
    pub fn arrange(&mut self, order: &[TileId]) {
        if self.state.awaiting_answer {
            self.board.arrange(order);
        }
    }

    /// Checks the current arrangement against the question line.
    ///
    /// Returns `None` if no question is waiting for an answer.
    pub fn submit(&mut self) -> Option<Verdict> {
        if !self.state.awaiting_answer {
            return None;
        }
        let expected = &self.dialogue.lines()[self.state.cursor].primary_text;
        let verdict = Verdict::from_bool(self.board.assembled() == *expected);

        self.state.awaiting_answer = false;
        self.state.last_result = Some(verdict);
        if verdict.is_correct() {
            self.correct += 1;
        }
        debug!(line = self.state.cursor, ?verdict, "structure submitted");
        Some(verdict)
    }

    /// Arranges tiles in `order` and submits in one step.
    pub fn submit_arrangement(&mut self, order: &[TileId]) -> Option<Verdict> {
        self.arrange(order);
        self.submit()
    }

    /// The answer event for the current question, once submitted.
    #[must_use]
    pub fn answer_event(&self) -> Option<Event> {
        self.state.last_result.map(|verdict| Event::Answered {
            line: self.state.cursor,
            verdict,
        })
    }

    fn pose_or_finish(&mut self, events: &mut Vec<Event>) {
        let Some(line) = self.walk.current() else {
            self.board = TileBoard::default();
            self.state.done = true;
            events.push(Event::Completed {
                score: Some(self.current_score()),
            });
            return;
        };

        let chunks = chunk(
            &self.dialogue.lines()[line].primary_text,
            self.config.max_tiles,
        );
        self.board = TileBoard::new(chunks, &mut self.rng);
        self.state.cursor = line;
        self.state.awaiting_answer = true;
        self.state.last_result = None;
        events.push(Event::QuestionPosed {
            line,
            number: self.walk.number(),
            total: self.walk.total(),
        });
    }

    fn current_score(&self) -> u8 {
        percentage(self.correct, self.walk.total())
    }
}

impl<R: Rng> ModeEngine for StructureEngine<R> {
    fn mode(&self) -> Mode {
        Mode::Structure
    }

    fn dialogue(&self) -> &Dialogue {
        &self.dialogue
    }

    fn state(&self) -> &WalkState {
        &self.state
    }

    fn start(&mut self) -> Vec<Event> {
        self.state = WalkState::default();
        self.walk.reset();
        self.board = TileBoard::default();
        self.correct = 0;

        let mut events = Vec::new();
        self.state.reveal_range(self.walk.opening(), &mut events);
        self.pose_or_finish(&mut events);
        events
    }

    fn advance(&mut self) -> Vec<Event> {
        if self.state.done || self.state.last_result.is_none() {
            return Vec::new();
        }

        let mut events = Vec::new();
        let lines = self.walk.step();
        self.state.reveal_range(lines, &mut events);
        self.pose_or_finish(&mut events);
        events
    }

    fn score(&self) -> Option<u8> {
        self.state.done.then(|| self.current_score())
    }
}
