//! Question/gap bookkeeping shared by the scored engines.

use std::ops::Range;

use colloquy_foundation::{Dialogue, Role};

/// Walks the question lines of one role through a dialogue.
///
/// Lines between two questions are gap lines; they are revealed without
/// learner input.
#[derive(Clone, Debug)]
pub(crate) struct QuestionWalk {
    questions: Vec<usize>,
    position: usize,
    line_count: usize,
}

impl QuestionWalk {
    pub(crate) fn new(dialogue: &Dialogue, role: Role) -> Self {
        Self {
            questions: dialogue.indices_for(role),
            position: 0,
            line_count: dialogue.len(),
        }
    }

    /// Rewinds to the first question.
    pub(crate) fn reset(&mut self) {
        self.position = 0;
    }

    pub(crate) fn total(&self) -> usize {
        self.questions.len()
    }

    /// 1-based number of the current question.
    pub(crate) fn number(&self) -> usize {
        self.position + 1
    }

    /// Line index of the current question, if any remain.
    pub(crate) fn current(&self) -> Option<usize> {
        self.questions.get(self.position).copied()
    }

    /// Lines shown before the first question (all lines if there is none).
    pub(crate) fn opening(&self) -> Range<usize> {
        0..self.questions.first().copied().unwrap_or(self.line_count)
    }

    /// Moves past the current question and returns the lines to reveal:
    /// the question line itself, then the gap up to the next question (or
    /// the end of the dialogue).
    pub(crate) fn step(&mut self) -> Range<usize> {
        let Some(current) = self.current() else {
            return self.line_count..self.line_count;
        };
        self.position += 1;
        let end = self.current().unwrap_or(self.line_count);
        current..end
    }
}
