//! Session configuration.

use std::path::PathBuf;
use std::time::Duration;

use colloquy_exercise::ExerciseConfig;

/// Configuration for one learner session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Options passed to every exercise.
    pub exercise: ExerciseConfig,

    /// Seed for the session's random source; `None` draws from entropy.
    pub seed: Option<u64>,

    /// Directory holding per-learner progress files.
    pub data_dir: PathBuf,

    /// Pause between revealed lines. Purely cosmetic.
    pub reveal_delay: Duration,

    /// Whether to print translations next to each line.
    pub show_translations: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exercise: ExerciseConfig::default(),
            seed: None,
            data_dir: PathBuf::from(".colloquy"),
            reveal_delay: Duration::ZERO,
            show_translations: false,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic and instant, for tests.
    #[must_use]
    pub fn testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            data_dir: std::env::temp_dir().join("colloquy-test"),
            ..Self::default()
        }
    }

    /// Builder method to set exercise options.
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseConfig) -> Self {
        self.exercise = exercise;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Builder method to set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Builder method to show or hide translations.
    #[must_use]
    pub fn with_translations(mut self, show: bool) -> Self {
        self.show_translations = show;
        self
    }
}
