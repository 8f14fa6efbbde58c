//! Integration tests for dialogue ingestion
//!
//! Tests structured and free-text input, validation, and role labels.

use colloquy_foundation::{
    DialogueDraft, ErrorKind, Role, ValidationError, parse_json, parse_transcript,
};
use serde_json::json;

fn reason(result: colloquy_foundation::Result<colloquy_foundation::Dialogue>) -> ValidationError {
    match result.map(|_| ()).unwrap_err().kind {
        ErrorKind::Validation(reason) => reason,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================================
// Structured Input
// =============================================================================

#[test]
fn empty_lines_fail_validation() {
    assert_eq!(
        reason(parse_json(r#"{ "title": "T", "lines": [] }"#)),
        ValidationError::NoUsableLines
    );
}

#[test]
fn draft_from_value() {
    let value = json!({
        "id": "greeting",
        "title": "Greeting",
        "description": "Say hello",
        "lines": [
            { "speaker": "A", "primaryText": "Hi" },
            { "speaker": "b", "primaryText": "Hello", "secondaryText": "Xin chào" }
        ]
    });
    let dialogue = DialogueDraft::from_value(value)
        .unwrap()
        .into_dialogue()
        .unwrap();
    assert_eq!(dialogue.id(), "greeting");
    assert_eq!(dialogue.description(), Some("Say hello"));
    assert_eq!(dialogue.indices_for(Role::B), vec![1]);
    assert_eq!(dialogue.translation_of("Hello"), Some("Xin chào"));
}

#[test]
fn blank_title_rejected() {
    assert_eq!(
        reason(parse_json(r#"{ "title": "  ", "lines": [ { "speaker": "A", "english": "Hi" } ] }"#)),
        ValidationError::MissingTitle
    );
}

#[test]
fn lines_must_be_a_sequence() {
    assert_eq!(
        reason(parse_json(r#"{ "title": "T", "lines": { "speaker": "A" } }"#)),
        ValidationError::LinesNotSequence
    );
}

#[test]
fn all_lines_filtered_is_rejected() {
    assert_eq!(
        reason(parse_json(
            r#"{ "title": "T", "lines": [ { "speaker": "C", "english": "Hi" }, { "speaker": "A" } ] }"#
        )),
        ValidationError::NoUsableLines
    );
}

#[test]
fn generated_ids_are_distinct() {
    let text = r#"{ "title": "T", "lines": [ { "speaker": "A", "english": "Hi" } ] }"#;
    let a = parse_json(text).unwrap();
    let b = parse_json(text).unwrap();
    assert_ne!(a.id(), b.id());
}

// =============================================================================
// Free Text
// =============================================================================

#[test]
fn transcript_two_lines() {
    let dialogue = parse_transcript("A: Hi\nB: Hello", "Greeting").unwrap();
    assert_eq!(dialogue.len(), 2);
    assert_eq!(dialogue.title(), "Greeting");
    assert_eq!(dialogue.lines()[0].speaker, Role::A);
    assert_eq!(dialogue.lines()[1].primary_text, "Hello");
}

#[test]
fn transcript_without_labels_fails() {
    assert_eq!(
        reason(parse_transcript("Hi\nHello", "Greeting")),
        ValidationError::NoRecognizedLines
    );
}

#[test]
fn transcript_accepts_role_aliases() {
    let dialogue = parse_transcript("STAFF : Welcome.\nGuest: Thanks!", "Lobby").unwrap();
    assert_eq!(dialogue.lines()[0].speaker, Role::A);
    assert_eq!(dialogue.lines()[1].speaker, Role::B);
    assert_eq!(dialogue.lines()[0].primary_text, "Welcome.");
}
