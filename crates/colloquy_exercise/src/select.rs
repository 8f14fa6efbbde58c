//! Select mode: pick the right response from a small option set.
//!
//! Questions are the lines spoken by the learner's role. For each one the
//! preceding gap lines are revealed, an option set is generated from the
//! other role's lines, and the first selection is final. `advance` reveals
//! the answered line and the next gap, then poses the next question.

use std::sync::Arc;

use colloquy_foundation::{Dialogue, Mode, SessionRng};
use rand::Rng;
use tracing::debug;

use crate::config::ExerciseConfig;
use crate::distractor::{AnswerOption, build_options};
use crate::engine::{Event, ModeEngine, Verdict, WalkState, percentage};
use crate::walk::QuestionWalk;

/// Multiple-choice engine.
#[derive(Clone, Debug)]
pub struct SelectEngine<R: Rng = SessionRng> {
    dialogue: Arc<Dialogue>,
    config: ExerciseConfig,
    rng: R,
    walk: QuestionWalk,
    state: WalkState,
    options: Vec<AnswerOption>,
    selected: Option<usize>,
    correct: usize,
}

impl<R: Rng> SelectEngine<R> {
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
            options: Vec::new(),
            selected: None,
            correct: 0,
        }
    }

    /// Options for the current question; empty when no question is active.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Index of the option chosen for the current question.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
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

    /// Chooses option `index` for the current question.
    ///
    /// Only the first selection counts; later calls, out-of-range indices
    /// and calls while no question is active return `None`.
    pub fn select(&mut self, index: usize) -> Option<Verdict> {
        if !self.state.awaiting_answer {
            return None;
        }
        let option = self.options.get(index)?;
        let verdict = Verdict::from_bool(option.is_correct);

        self.selected = Some(index);
        self.state.awaiting_answer = false;
        self.state.last_result = Some(verdict);
        if verdict.is_correct() {
            self.correct += 1;
        }
        debug!(line = self.state.cursor, ?verdict, "select answered");
        Some(verdict)
    }

    /// The answer event for the current question, once answered.
    #[must_use]
    pub fn answer_event(&self) -> Option<Event> {
        self.state.last_result.map(|verdict| Event::Answered {
            line: self.state.cursor,
            verdict,
        })
    }

    fn pose_or_finish(&mut self, events: &mut Vec<Event>) {
        let Some(line) = self.walk.current() else {
            self.options.clear();
            self.state.done = true;
            events.push(Event::Completed {
                score: Some(self.current_score()),
            });
            return;
        };

        let correct = &self.dialogue.lines()[line];
        self.options = build_options(
            correct,
            &self.dialogue,
            self.config.distractor_role(),
            self.config.max_distractors,
            &mut self.rng,
        );
        self.selected = None;
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

impl<R: Rng> ModeEngine for SelectEngine<R> {
    fn mode(&self) -> Mode {
        Mode::Select
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
        self.options.clear();
        self.selected = None;
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
