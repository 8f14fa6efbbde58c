//! The shape shared by every mode engine.

use colloquy_foundation::{Dialogue, Mode};

/// Outcome of one answered question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The learner's answer matched.
    Correct,
    /// The learner's answer did not match.
    Incorrect,
}

impl Verdict {
    /// Maps a comparison result to a verdict.
    #[must_use]
    pub const fn from_bool(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    /// Returns true for [`Verdict::Correct`].
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// A UI-facing state transition.
///
/// A presentation layer may replay these with delays between them; doing so
/// never changes engine state or scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A line became visible.
    Revealed(usize),
    /// A question line is waiting for the learner.
    QuestionPosed {
        /// Index of the question line in the dialogue.
        line: usize,
        /// 1-based question number.
        number: usize,
        /// Number of questions in this exercise.
        total: usize,
    },
    /// The learner answered the current question.
    Answered {
        /// Index of the question line in the dialogue.
        line: usize,
        /// Whether the answer was right.
        verdict: Verdict,
    },
    /// The exercise reached its terminal state.
    Completed {
        /// Final score, for scored modes.
        score: Option<u8>,
    },
}

/// Cursor-driven walk state common to all engines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkState {
    /// Current line: the last line read in practice mode, the active
    /// question line in scored modes.
    pub cursor: usize,
    /// Revealed line indices, in reveal order, without duplicates.
    pub revealed: Vec<usize>,
    /// True while a question waits for an answer.
    pub awaiting_answer: bool,
    /// Verdict of the most recent answer, cleared when a new question is posed.
    pub last_result: Option<Verdict>,
    /// True once the engine is done.
    pub done: bool,
}

impl WalkState {
    /// Reveals `line` if it is not visible yet, returning the event.
    pub(crate) fn reveal(&mut self, line: usize) -> Option<Event> {
        if self.revealed.contains(&line) {
            None
        } else {
            self.revealed.push(line);
            Some(Event::Revealed(line))
        }
    }

    /// Reveals every line in `lines`, appending events to `events`.
    pub(crate) fn reveal_range(&mut self, lines: std::ops::Range<usize>, events: &mut Vec<Event>) {
        events.extend(lines.filter_map(|line| self.reveal(line)));
    }
}

/// Common interface of the three mode engines.
pub trait ModeEngine {
    /// The mode this engine implements.
    fn mode(&self) -> Mode;

    /// The dialogue being walked.
    fn dialogue(&self) -> &Dialogue;

    /// Current walk state.
    fn state(&self) -> &WalkState;

    /// Resets to the initial state and performs the opening transitions.
    fn start(&mut self) -> Vec<Event>;

    /// Moves past the current line or answered question.
    ///
    /// A no-op (no events) when the engine is waiting for an answer or done.
    fn advance(&mut self) -> Vec<Event>;

    /// Final score; `None` for unscored modes or before completion.
    fn score(&self) -> Option<u8>;

    /// Returns true once the engine reached its terminal state.
    fn is_complete(&self) -> bool {
        self.state().done
    }

    /// Starts over from the beginning ("try again").
    fn restart(&mut self) -> Vec<Event> {
        self.start()
    }

    /// Fraction of the dialogue revealed so far, in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    fn progress_fraction(&self) -> f64 {
        self.state().revealed.len() as f64 / self.dialogue().len() as f64
    }
}

/// Rounded percentage of `correct` out of `total`; 0 when there were no
/// questions.
#[must_use]
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    let rounded = (200 * correct + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}
