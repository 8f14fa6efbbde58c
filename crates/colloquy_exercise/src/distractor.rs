//! Wrong-answer generation for multiple-choice questions.
//!
//! Distractors are other lines of the same dialogue spoken by the pool role,
//! so every option sounds like something someone in the conversation would
//! say. An empty pool is not an error: the question simply has one option.

use colloquy_foundation::{Dialogue, DialogueLine, Role};
use rand::Rng;
use rand::seq::SliceRandom;

/// One multiple-choice option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOption {
    /// Text shown to the learner.
    pub text: String,
    /// Translation, looked up by exact text match in the dialogue.
    pub secondary_text: Option<String>,
    /// Whether choosing this option answers the question correctly.
    pub is_correct: bool,
}

/// Picks up to `max` distractor texts for `correct` from `pool_role`'s lines.
///
/// The pool holds every distinct text spoken by `pool_role` that differs
/// from the correct text. It is shuffled uniformly and truncated.
pub fn generate_distractors<R: Rng + ?Sized>(
    correct: &DialogueLine,
    dialogue: &Dialogue,
    pool_role: Role,
    max: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<&str> = Vec::new();
    for line in dialogue.lines() {
        let text = line.primary_text.as_str();
        if line.speaker == pool_role && text != correct.primary_text && !pool.contains(&text) {
            pool.push(text);
        }
    }

    pool.shuffle(rng);
    pool.truncate(max);
    pool.into_iter().map(str::to_string).collect()
}

/// Builds the shuffled option set for a question: the correct answer plus
/// up to `max_distractors` wrong ones, exactly one marked correct.
pub fn build_options<R: Rng + ?Sized>(
    correct: &DialogueLine,
    dialogue: &Dialogue,
    pool_role: Role,
    max_distractors: usize,
    rng: &mut R,
) -> Vec<AnswerOption> {
    let distractors = generate_distractors(correct, dialogue, pool_role, max_distractors, rng);

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(AnswerOption {
        text: correct.primary_text.clone(),
        secondary_text: correct.secondary_text.clone(),
        is_correct: true,
    });
    options.extend(distractors.into_iter().map(|text| AnswerOption {
        secondary_text: dialogue.translation_of(&text).map(str::to_string),
        text,
        is_correct: false,
    }));

    options.shuffle(rng);
    options
}
