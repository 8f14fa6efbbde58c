//! Dialogue ingestion from structured objects and free text.
//!
//! Two input formats are accepted:
//!
//! ```text
//! { "id": "room-service-1", "title": "Room Service",
//!   "lines": [ { "speaker": "staff", "english": "Good evening.", "vietnamese": "..." } ] }
//!
//! A: Good evening, room service.
//! B: Hi, I'd like to order dinner.
//! ```
//!
//! Lines with an unknown speaker or blank text are dropped before the
//! non-empty check. Nothing is constructed when validation fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::dialogue::{Dialogue, DialogueLine};
use crate::error::{Error, Result, ValidationError};
use crate::types::Role;

/// `<label>: <text>` with a case-insensitive role label.
static TRANSCRIPT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(a|b|staff|guest)\s*:\s*(.+)$").expect("valid transcript regex")
});

pub use crate::dialogue::normalize_text;

/// Generates an id for content that arrived without one.
#[must_use]
pub fn generate_id() -> String {
    format!("custom-{}", Uuid::new_v4().simple())
}

// =============================================================================
// Structured Drafts
// =============================================================================

/// One line as received from a content source, before validation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDraft {
    /// Speaker label (`A`/`B`/`staff`/`guest`).
    #[serde(default)]
    pub speaker: Option<String>,
    /// Text in the practiced language.
    #[serde(default, alias = "english")]
    pub primary_text: Option<String>,
    /// Optional translation.
    #[serde(default, alias = "vietnamese")]
    pub secondary_text: Option<String>,
}

impl LineDraft {
    /// Converts to a line, or `None` if the speaker or text is unusable.
    fn into_line(self) -> Option<DialogueLine> {
        let speaker = Role::from_label(self.speaker.as_deref()?)?;
        let text = normalize_text(&self.primary_text?);
        if text.is_empty() {
            return None;
        }
        let secondary_text = self
            .secondary_text
            .map(|t| normalize_text(&t))
            .filter(|t| !t.is_empty());
        Some(DialogueLine {
            speaker,
            primary_text: text,
            secondary_text,
        })
    }
}

/// A dialogue as received from a content source, before validation.
///
/// `lines` is kept as a raw JSON value so a non-sequence can be reported
/// distinctly from a missing field.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DialogueDraft {
    /// Unique id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional course unit.
    #[serde(default)]
    pub unit: Option<String>,
    /// Raw line entries.
    #[serde(default)]
    pub lines: Option<Value>,
}

impl DialogueDraft {
    /// Reads a draft from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::validation(ValidationError::Malformed(e.to_string())))
    }

    /// Validates the draft and builds a [`Dialogue`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title is missing or blank, `lines`
    /// is missing or not a sequence, or no line survives filtering.
    pub fn into_dialogue(self) -> Result<Dialogue> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(ValidationError::MissingTitle)?;

        let entries = match self.lines {
            None | Some(Value::Null) => return Err(ValidationError::MissingLines.into()),
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(ValidationError::LinesNotSequence.into()),
        };

        let total = entries.len();
        let lines: Vec<DialogueLine> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<LineDraft>(entry).ok())
            .filter_map(LineDraft::into_line)
            .collect();

        if lines.len() < total {
            debug!(
                dropped = total - lines.len(),
                kept = lines.len(),
                "dropped unusable dialogue lines"
            );
        }
        if lines.is_empty() {
            return Err(ValidationError::NoUsableLines.into());
        }

        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id);

        let mut dialogue = Dialogue::new(id, title, lines)?;
        if let Some(description) = self.description {
            dialogue = dialogue.with_description(description);
        }
        if let Some(unit) = self.unit {
            dialogue = dialogue.with_unit(unit);
        }
        Ok(dialogue)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Parses and validates a dialogue from JSON text.
///
/// # Errors
///
/// Returns a validation error if the text is not valid JSON or the object
/// fails validation.
pub fn parse_json(text: &str) -> Result<Dialogue> {
    let draft: DialogueDraft = serde_json::from_str(text)
        .map_err(|e| Error::validation(ValidationError::Malformed(e.to_string())))?;
    draft.into_dialogue()
}

/// Parses a line-oriented transcript such as `"A: Hi\nB: Hello"`.
///
/// Lines without a recognized role label are silently dropped.
///
/// # Errors
///
/// Returns a validation error if the title is blank or no line is recognized.
pub fn parse_transcript(text: &str, title: &str) -> Result<Dialogue> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle.into());
    }

    let lines: Vec<DialogueLine> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let captures = TRANSCRIPT_LINE.captures(line)?;
            let speaker = Role::from_label(&captures[1])?;
            let text = normalize_text(&captures[2]);
            (!text.is_empty()).then(|| DialogueLine::new(speaker, text))
        })
        .collect();

    if lines.is_empty() {
        return Err(ValidationError::NoRecognizedLines.into());
    }

    Dialogue::new(generate_id(), title, lines)
}
