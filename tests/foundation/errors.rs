//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use colloquy_foundation::{Error, ErrorKind, Mode, ValidationError};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_validation() {
    let err = Error::validation(ValidationError::MissingTitle);
    assert!(err.is_validation());
    assert!(format!("{err}").contains("title"));
}

#[test]
fn error_from_validation_reason() {
    let err: Error = ValidationError::NoUsableLines.into();
    assert!(matches!(
        err.kind,
        ErrorKind::Validation(ValidationError::NoUsableLines)
    ));
}

#[test]
fn error_mode_locked() {
    let err = Error::mode_locked("check-in", Mode::Structure);
    let msg = format!("{err}");
    assert!(msg.contains("structure"));
    assert!(msg.contains("check-in"));
    assert!(!err.is_validation());
}

#[test]
fn error_unknown_dialogue() {
    let err = Error::unknown_dialogue("missing");
    assert!(matches!(err.kind, ErrorKind::UnknownDialogue(ref id) if id == "missing"));
}

#[test]
fn error_persistence() {
    let err = Error::persistence("disk full");
    assert!(matches!(err.kind, ErrorKind::Persistence(_)));
    assert!(format!("{err}").contains("disk full"));
}

// =============================================================================
// Error Kinds
// =============================================================================

#[test]
fn validation_reasons_display() {
    let reasons = [
        ValidationError::MissingTitle,
        ValidationError::MissingLines,
        ValidationError::LinesNotSequence,
        ValidationError::NoUsableLines,
        ValidationError::NoRecognizedLines,
        ValidationError::BlankLine(2),
        ValidationError::Malformed("x".into()),
    ];
    for reason in reasons {
        assert!(!reason.to_string().is_empty());
    }
}
