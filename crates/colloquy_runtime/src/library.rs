//! Dialogues the learner added, kept between sessions.
//!
//! Each dialogue is one JSON file in the library directory, written in the
//! same shape the JSON ingestion path reads back.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use colloquy_foundation::{Dialogue, Error, Result, parse_json};
use colloquy_progress::store::{file_stem, write_atomic};
use tracing::{debug, warn};

/// A directory of saved dialogues.
#[derive(Clone, Debug)]
pub struct LibraryDir {
    root: PathBuf,
}

impl LibraryDir {
    /// Creates a library rooted at `root`. The directory is created on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The library directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the dialogue with `id`.
    #[must_use]
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(id)))
    }

    /// Writes `dialogue`, replacing any saved dialogue with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, dialogue: &Dialogue) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            Error::io(format!(
                "failed to create directory '{}': {e}",
                self.root.display()
            ))
        })?;
        let bytes =
            serde_json::to_vec_pretty(dialogue).map_err(|e| Error::serialization(e.to_string()))?;
        let path = self.path_for(dialogue.id());
        write_atomic(&path, &bytes)?;
        debug!(id = dialogue.id(), path = %path.display(), "dialogue saved");
        Ok(())
    }

    /// Reads every saved dialogue, ordered by file name.
    ///
    /// A missing directory is an empty library. Files that no longer pass
    /// validation are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be listed.
    pub fn load_all(&self) -> Result<Vec<Dialogue>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io(format!(
                    "failed to read directory '{}': {e}",
                    self.root.display()
                )));
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let dialogues = paths
            .iter()
            .filter_map(|path| match read_dialogue(path) {
                Ok(dialogue) => Some(dialogue),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping saved dialogue");
                    None
                }
            })
            .collect();
        Ok(dialogues)
    }
}

fn read_dialogue(path: &Path) -> Result<Dialogue> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;
    parse_json(&text)
}
