//! Learner progress for Colloquy.
//!
//! This crate provides:
//! - [`ProgressLedger`] - Completion and best score per (dialogue, mode), and unlock gating
//! - [`LearnerIdentity`] - The key a ledger is stored under
//! - [`ProgressStore`] - Persistence backends ([`MemoryStore`], [`FileStore`])
//! - [`ProgressTracker`] - A ledger bound to its learner and store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod identity;
pub mod ledger;
pub mod store;
pub mod tracker;

pub use identity::LearnerIdentity;
pub use ledger::{ConversationProgress, ModeProgress, PERFECT_SCORE, ProgressLedger};
pub use store::{FileStore, MemoryStore, ProgressStore};
pub use tracker::ProgressTracker;
