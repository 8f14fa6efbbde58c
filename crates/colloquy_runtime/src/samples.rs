//! Built-in starter dialogues.

use colloquy_foundation::{Dialogue, DialogueDraft, Error, Result, ValidationError};
use serde_json::Value;

const SAMPLES_JSON: &str = include_str!("../data/samples.json");

/// Parses a JSON array of dialogue objects, validating each.
///
/// # Errors
///
/// Returns the first validation error, or a malformed-input error if the
/// text is not a JSON array.
pub fn parse_library(text: &str) -> Result<Vec<Dialogue>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::validation(ValidationError::Malformed(e.to_string())))?;
    let Value::Array(entries) = value else {
        return Err(ValidationError::Malformed("expected an array of dialogues".into()).into());
    };
    entries
        .into_iter()
        .map(|entry| DialogueDraft::from_value(entry)?.into_dialogue())
        .collect()
}

/// The built-in sample library.
///
/// # Errors
///
/// Returns an error only if the bundled resource is invalid.
pub fn sample_library() -> Result<Vec<Dialogue>> {
    parse_library(SAMPLES_JSON)
}
