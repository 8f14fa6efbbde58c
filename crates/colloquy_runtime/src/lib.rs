//! Session management and terminal front-end for Colloquy.
//!
//! This crate provides:
//! - [`Session`] - Content library, learner progress, and exercise lifecycle
//! - [`LibraryDir`] - Added dialogues kept between sessions
//! - [`SessionConfig`] - Session-wide options
//! - [`Repl`] - Interactive terminal driver
//! - [`Pacer`] - Cosmetic pacing of revealed lines
//! - [`samples`] - Built-in starter dialogues

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod library;
pub mod pacing;
pub mod render;
pub mod repl;
pub mod samples;
pub mod session;

pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use library::LibraryDir;
pub use pacing::{Output, Pacer};
pub use repl::{Command, Repl};
pub use samples::{parse_library, sample_library};
pub use session::{ModeCard, Session};
