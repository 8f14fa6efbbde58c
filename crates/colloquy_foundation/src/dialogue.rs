//! The dialogue model: an ordered, two-party script.
//!
//! A [`Dialogue`] can only be constructed through validation, so every value
//! of the type has a non-blank title and at least one line. Line text is
//! normalized on the way in, which lets tiles rebuild every sentence exactly.
//! Lines are immutable once loaded.

use serde::Serialize;

use crate::error::{Error, Result, ValidationError};
use crate::types::Role;

/// Trims and collapses whitespace runs so tiles can rebuild the text exactly.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One line of a dialogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueLine {
    /// Who speaks this line.
    pub speaker: Role,
    /// Text in the practiced language.
    pub primary_text: String,
    /// Optional parallel translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
}

impl DialogueLine {
    /// Creates a line without a translation.
    #[must_use]
    pub fn new(speaker: Role, primary_text: impl Into<String>) -> Self {
        Self {
            speaker,
            primary_text: primary_text.into(),
            secondary_text: None,
        }
    }

    /// Builder method to attach a translation.
    #[must_use]
    pub fn with_translation(mut self, secondary_text: impl Into<String>) -> Self {
        self.secondary_text = Some(secondary_text.into());
        self
    }
}

/// A validated practice dialogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dialogue {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    lines: Vec<DialogueLine>,
}

impl Dialogue {
    /// Creates a dialogue after validating title and lines.
    ///
    /// Line texts are normalized with [`normalize_text`]; a translation that
    /// normalizes to nothing is dropped.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title is blank, there are no lines,
    /// or a line has blank text.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        lines: Vec<DialogueLine>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::MissingTitle.into());
        }
        if lines.is_empty() {
            return Err(ValidationError::NoUsableLines.into());
        }
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let primary_text = normalize_text(&line.primary_text);
                if primary_text.is_empty() {
                    return Err(Error::validation(ValidationError::BlankLine(index)));
                }
                Ok(DialogueLine {
                    speaker: line.speaker,
                    primary_text,
                    secondary_text: line
                        .secondary_text
                        .map(|t| normalize_text(&t))
                        .filter(|t| !t.is_empty()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: id.into(),
            title: title.trim().to_string(),
            description: None,
            unit: None,
            lines,
        })
    }

    /// Builder method to set a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the course unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Returns the unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the course unit, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Returns all lines in order.
    #[must_use]
    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    /// Returns the line at `index`.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&DialogueLine> {
        self.lines.get(index)
    }

    /// Returns the number of lines (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the indices of every line spoken by `role`, in order.
    #[must_use]
    pub fn indices_for(&self, role: Role) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.speaker == role)
            .map(|(index, _)| index)
            .collect()
    }

    /// Looks up the translation of the first line whose text matches exactly.
    #[must_use]
    pub fn translation_of(&self, primary_text: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.primary_text == primary_text)
            .and_then(|line| line.secondary_text.as_deref())
    }
}
