//! Configuration for exercise generation.

use colloquy_foundation::Role;

use crate::chunker::DEFAULT_MAX_TILES;

/// Configuration shared by the mode engines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseConfig {
    /// The role the learner practices; its lines become questions.
    pub learner_role: Role,

    /// Upper bound on tiles per sentence in structure mode.
    pub max_tiles: usize,

    /// Upper bound on wrong options per question in select mode.
    pub max_distractors: usize,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            learner_role: Role::A,
            max_tiles: DEFAULT_MAX_TILES,
            max_distractors: 2,
        }
    }
}

impl ExerciseConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the learner's role.
    #[must_use]
    pub fn with_learner_role(mut self, role: Role) -> Self {
        self.learner_role = role;
        self
    }

    /// Builder method to set the tile bound.
    #[must_use]
    pub fn with_max_tiles(mut self, max_tiles: usize) -> Self {
        self.max_tiles = max_tiles;
        self
    }

    /// Builder method to set the distractor bound.
    #[must_use]
    pub fn with_max_distractors(mut self, max_distractors: usize) -> Self {
        self.max_distractors = max_distractors;
        self
    }

    /// The role whose lines supply wrong options.
    #[must_use]
    pub fn distractor_role(&self) -> Role {
        self.learner_role.opposite()
    }
}
