//! Colloquy - Guided dialogue practice
//!
//! This crate re-exports all layers of the Colloquy system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: colloquy_runtime    - Session, REPL, CLI
//! Layer 2: colloquy_progress   - Ledger, unlock gating, progress stores
//! Layer 1: colloquy_exercise   - Distractors, tile chunking, mode engines
//! Layer 0: colloquy_foundation - Dialogue model, ingestion, errors, RNG
//! ```

pub use colloquy_exercise as exercise;
pub use colloquy_foundation as foundation;
pub use colloquy_progress as progress;
pub use colloquy_runtime as runtime;
