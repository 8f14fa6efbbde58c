//! Integration tests for Layer 2: Progress
//!
//! Tests for the ledger's unlock gating and for progress persistence.

mod stores;
