//! One running exercise, whichever mode it is.

use std::sync::Arc;

use colloquy_foundation::{Dialogue, Mode, SessionRng};
use rand::Rng;

use crate::config::ExerciseConfig;
use crate::engine::ModeEngine;
use crate::practice::PracticeEngine;
use crate::select::SelectEngine;
use crate::structure::StructureEngine;

/// A mode engine selected by [`Mode`].
#[derive(Clone, Debug)]
pub enum Exercise<R: Rng = SessionRng> {
    /// Linear read-through.
    Practice(PracticeEngine),
    /// Multiple-choice responses.
    Select(SelectEngine<R>),
    /// Tile reordering.
    Structure(StructureEngine<R>),
}

impl<R: Rng> Exercise<R> {
    /// Builds the engine for `mode` (not yet started).
    #[must_use]
    pub fn new(mode: Mode, dialogue: Arc<Dialogue>, config: ExerciseConfig, rng: R) -> Self {
        match mode {
            Mode::Practice => Self::Practice(PracticeEngine::new(dialogue)),
            Mode::Select => Self::Select(SelectEngine::new(dialogue, config, rng)),
            Mode::Structure => Self::Structure(StructureEngine::new(dialogue, config, rng)),
        }
    }

    /// The engine behind the common interface.
    #[must_use]
    pub fn engine(&self) -> &dyn ModeEngine {
        match self {
            Self::Practice(engine) => engine,
            Self::Select(engine) => engine,
            Self::Structure(engine) => engine,
        }
    }

    /// The engine behind the common interface, mutably.
    pub fn engine_mut(&mut self) -> &mut dyn ModeEngine {
        match self {
            Self::Practice(engine) => engine,
            Self::Select(engine) => engine,
            Self::Structure(engine) => engine,
        }
    }

    /// The mode being exercised.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.engine().mode()
    }

    /// The dialogue id being exercised.
    #[must_use]
    pub fn dialogue_id(&self) -> &str {
        self.engine().dialogue().id()
    }
}
