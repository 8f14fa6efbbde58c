//! Session state: content library, learner progress, and the random source.
//!
//! A session is the only place engines and the ledger meet. It refuses to
//! start locked modes and records a completion when an exercise finishes.
//! File-backed sessions also keep imported dialogues in a [`LibraryDir`].

use std::fs;
use std::path::Path;
use std::sync::Arc;

use colloquy_exercise::{Event, Exercise};
use colloquy_foundation::{
    Dialogue, Error, Mode, Result, SessionRng, parse_json, parse_transcript, rng,
};
use colloquy_progress::{FileStore, LearnerIdentity, ProgressStore, ProgressTracker};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::library::LibraryDir;
use crate::samples::sample_library;

/// Status of one mode for one dialogue, as shown on the mode selection screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeCard {
    /// The mode.
    pub mode: Mode,
    /// Whether it may be started.
    pub unlocked: bool,
    /// Whether it has been completed.
    pub completed: bool,
    /// Best score, for select mode.
    pub best_score: Option<u8>,
}

/// One learner's practice session.
#[derive(Debug)]
pub struct Session<S: ProgressStore = FileStore> {
    config: SessionConfig,
    library: Vec<Arc<Dialogue>>,
    tracker: ProgressTracker<S>,
    saved: Option<LibraryDir>,
    rng: SessionRng,
}

impl Session<FileStore> {
    /// Opens a session for `identity` backed by files under the configured
    /// data directory, with previously imported dialogues already loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialogue directory exists but cannot be listed.
    pub fn open(config: SessionConfig, identity: LearnerIdentity) -> Result<Self> {
        let store = FileStore::new(&config.data_dir);
        let library = LibraryDir::new(config.data_dir.join("dialogues"));
        Self::with_store(config, identity, store).with_library_dir(library)
    }
}

impl<S: ProgressStore> Session<S> {
    /// Opens a session for `identity` backed by `store`. Imported dialogues
    /// are kept in memory only.
    pub fn with_store(config: SessionConfig, identity: LearnerIdentity, store: S) -> Self {
        let tracker = ProgressTracker::open(identity, store);
        let rng = config.seed.map_or_else(rng::from_entropy, rng::seeded);
        Self {
            config,
            library: Vec::new(),
            tracker,
            saved: None,
            rng,
        }
    }

    /// Keeps imported dialogues in `library` and loads the ones saved there.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be listed.
    pub fn with_library_dir(mut self, library: LibraryDir) -> Result<Self> {
        let saved = library.load_all()?;
        info!(count = saved.len(), dir = %library.root().display(), "saved dialogues loaded");
        for dialogue in saved {
            self.add_dialogue(dialogue);
        }
        self.saved = Some(library);
        Ok(self)
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The progress tracker.
    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker<S> {
        &self.tracker
    }

    // =========================================================================
    // Library
    // =========================================================================

    /// Loaded dialogues, in the order they were added.
    #[must_use]
    pub fn library(&self) -> &[Arc<Dialogue>] {
        &self.library
    }

    /// Looks up a dialogue by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no dialogue with this id is loaded.
    pub fn dialogue(&self, id: &str) -> Result<Arc<Dialogue>> {
        self.library
            .iter()
            .find(|d| d.id() == id)
            .cloned()
            .ok_or_else(|| Error::unknown_dialogue(id))
    }

    /// Adds a dialogue, replacing any loaded dialogue with the same id.
    pub fn add_dialogue(&mut self, dialogue: Dialogue) -> Arc<Dialogue> {
        let dialogue = Arc::new(dialogue);
        if let Some(slot) = self.library.iter_mut().find(|d| d.id() == dialogue.id()) {
            debug!(id = dialogue.id(), "replacing dialogue");
            *slot = Arc::clone(&dialogue);
        } else {
            self.library.push(Arc::clone(&dialogue));
        }
        dialogue
    }

    /// Adds the built-in sample dialogues.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled samples are invalid.
    pub fn load_samples(&mut self) -> Result<usize> {
        let samples = sample_library()?;
        let count = samples.len();
        for dialogue in samples {
            self.add_dialogue(dialogue);
        }
        Ok(count)
    }

    /// Loads a dialogue from a file.
    ///
    /// JSON files (by extension, or content starting with `{`) are parsed as
    /// dialogue objects; anything else is read as an `A: ...` transcript
    /// titled after the file name. The result is imported with
    /// [`Session::import_dialogue`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the content is invalid.
    pub fn load_file(&mut self, path: &Path) -> Result<Arc<Dialogue>> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            || text.trim_start().starts_with('{');
        let dialogue = if is_json {
            parse_json(&text)?
        } else {
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
                .unwrap_or_default();
            parse_transcript(&text, &title)?
        };

        info!(
            id = dialogue.id(),
            lines = dialogue.len(),
            path = %path.display(),
            "dialogue loaded"
        );
        Ok(self.import_dialogue(dialogue))
    }

    /// Adds a learner-supplied dialogue and saves it to the library
    /// directory, if the session has one.
    ///
    /// Importing a dialogue with the same title and lines as a loaded one
    /// returns the loaded one, so re-importing a file never duplicates it.
    /// A failed save is logged; the dialogue stays loaded for this session.
    pub fn import_dialogue(&mut self, dialogue: Dialogue) -> Arc<Dialogue> {
        if let Some(existing) = self
            .library
            .iter()
            .find(|d| d.title() == dialogue.title() && d.lines() == dialogue.lines())
        {
            debug!(id = existing.id(), "dialogue already loaded");
            return Arc::clone(existing);
        }
        let dialogue = self.add_dialogue(dialogue);
        if let Some(library) = &self.saved {
            if let Err(e) = library.save(&dialogue) {
                warn!(id = dialogue.id(), error = %e, "dialogue not saved");
            }
        }
        dialogue
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Status of every mode for `dialogue_id`, in unlock order.
    #[must_use]
    pub fn mode_cards(&self, dialogue_id: &str) -> Vec<ModeCard> {
        let progress = self.tracker.get_progress(dialogue_id);
        Mode::ALL
            .into_iter()
            .map(|mode| ModeCard {
                mode,
                unlocked: self.tracker.is_mode_unlocked(dialogue_id, mode),
                completed: progress.get(mode).completed,
                best_score: progress.get(mode).best_score,
            })
            .collect()
    }

    // =========================================================================
    // Exercises
    // =========================================================================

    /// Creates and starts an exercise.
    ///
    /// Returns the exercise along with the events of its first transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialogue is unknown or the mode is locked.
    pub fn begin(&mut self, dialogue_id: &str, mode: Mode) -> Result<(Exercise, Vec<Event>)> {
        let dialogue = self.dialogue(dialogue_id)?;
        if !self.tracker.is_mode_unlocked(dialogue_id, mode) {
            return Err(Error::mode_locked(dialogue_id, mode));
        }

        let mut exercise = Exercise::new(
            mode,
            dialogue,
            self.config.exercise.clone(),
            rng::fork(&mut self.rng),
        );
        let events = exercise.engine_mut().start();
        debug!(dialogue = dialogue_id, %mode, "exercise started");
        Ok((exercise, events))
    }

    /// Records a finished exercise in the ledger.
    ///
    /// Returns false without recording anything if the exercise is not
    /// complete. Practice runs are recorded without a score.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the ledger could not be persisted; the
    /// completion is still recorded in memory.
    pub fn finish(&mut self, exercise: &Exercise) -> Result<bool> {
        let engine = exercise.engine();
        if !engine.is_complete() {
            return Ok(false);
        }
        let score = if engine.mode().is_scored() {
            engine.score()
        } else {
            None
        };
        self.tracker
            .complete_mode(exercise.dialogue_id(), exercise.mode(), score)?;
        Ok(true)
    }
}
