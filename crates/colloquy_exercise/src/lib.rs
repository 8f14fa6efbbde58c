//! Exercise generation and mode engines for Colloquy.
//!
//! This crate provides:
//! - [`distractor`] - Plausible wrong options for multiple-choice questions
//! - [`chunker`] - Bounded word/phrase tiles for sentence reordering
//! - [`PracticeEngine`], [`SelectEngine`], [`StructureEngine`] - Per-mode state machines
//! - [`Exercise`] - One running engine, whichever mode it is
//!
//! # Engine shape
//!
//! ```text
//!   start() ──► [gap lines revealed] ──► QuestionPosed ──► select()/submit()
//!                      ▲                                          │
//!                      └────────────── advance() ◄────────────────┘
//!                                          │ (no questions left)
//!                                          ▼
//!                                Completed { score }
//! ```
//!
//! Every transition is synchronous and returns the [`Event`]s it produced;
//! pacing is left to the presentation layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chunker;
pub mod config;
pub mod distractor;
pub mod engine;
pub mod exercise;
pub mod practice;
pub mod select;
pub mod structure;
pub mod tile;
mod walk;

pub use chunker::{DEFAULT_MAX_TILES, chunk};
pub use config::ExerciseConfig;
pub use distractor::{AnswerOption, build_options, generate_distractors};
pub use engine::{Event, ModeEngine, Verdict, WalkState, percentage};
pub use exercise::Exercise;
pub use practice::PracticeEngine;
pub use select::SelectEngine;
pub use structure::StructureEngine;
pub use tile::{Tile, TileBoard, TileId};
