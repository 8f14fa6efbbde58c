//! Error types for the Colloquy system.
//!
//! Uses `thiserror` for ergonomic error definition. A learner giving a wrong
//! answer is never an error; only malformed content, missing dialogues, locked
//! modes, and store failures are.

use thiserror::Error;

use crate::types::Mode;

/// Result alias used throughout Colloquy.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Colloquy operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a dialogue validation error.
    #[must_use]
    pub fn validation(reason: ValidationError) -> Self {
        Self::new(ErrorKind::Validation(reason))
    }

    /// Creates a progress persistence error.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an unknown dialogue error.
    #[must_use]
    pub fn unknown_dialogue(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDialogue(id.into()))
    }

    /// Creates a mode locked error.
    #[must_use]
    pub fn mode_locked(dialogue: impl Into<String>, mode: Mode) -> Self {
        Self::new(ErrorKind::ModeLocked {
            dialogue: dialogue.into(),
            mode,
        })
    }

    /// Returns true if this error rejected dialogue input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Dialogue input was rejected; nothing was constructed.
    #[error("invalid dialogue: {0}")]
    Validation(ValidationError),

    /// The progress store could not be read or written.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// Encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system access failed.
    #[error("io error: {0}")]
    Io(String),

    /// No dialogue with this id is loaded.
    #[error("unknown dialogue: {0}")]
    UnknownDialogue(String),

    /// The mode has not been unlocked for this dialogue yet.
    #[error("{mode} mode is locked for dialogue {dialogue}")]
    ModeLocked {
        /// The dialogue id.
        dialogue: String,
        /// The locked mode.
        mode: Mode,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Reasons a dialogue is rejected at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is missing or blank.
    #[error("title is missing or empty")]
    MissingTitle,

    /// The `lines` field is absent.
    #[error("lines are missing")]
    MissingLines,

    /// The `lines` field is present but is not a sequence.
    #[error("lines must be a sequence")]
    LinesNotSequence,

    /// Every line was filtered out (unknown speaker or blank text).
    #[error("no usable lines after filtering")]
    NoUsableLines,

    /// A line's text is blank; carries the line index.
    #[error("line {0} has no text")]
    BlankLine(usize),

    /// Free-text input contained no line with a recognized role label.
    #[error("no line starts with a recognized role label")]
    NoRecognizedLines,

    /// The input could not be parsed at all.
    #[error("malformed input: {0}")]
    Malformed(String),
}

impl From<ValidationError> for Error {
    fn from(reason: ValidationError) -> Self {
        Self::validation(reason)
    }
}
