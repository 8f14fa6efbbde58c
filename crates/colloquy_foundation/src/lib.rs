//! Core types, dialogue model, and errors for Colloquy.
//!
//! This crate provides:
//! - [`Role`] and [`Mode`] - The two speaking parties and the three exercise modes
//! - [`Dialogue`] / [`DialogueLine`] - Validated, immutable practice content
//! - [`ingest`] - Structured (JSON) and free-text dialogue ingestion
//! - [`Error`] - Error types with a validation taxonomy
//! - [`rng`] - The single swappable random source

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dialogue;
pub mod error;
pub mod ingest;
pub mod rng;
pub mod types;

pub use dialogue::{Dialogue, DialogueLine};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use ingest::{DialogueDraft, LineDraft, parse_json, parse_transcript};
pub use rng::SessionRng;
pub use types::{Mode, Role};
