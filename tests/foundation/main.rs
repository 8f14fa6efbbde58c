//! Integration tests for Layer 0: Foundation
//!
//! Tests for the dialogue model, ingestion, and errors.

mod errors;
mod ingestion;
