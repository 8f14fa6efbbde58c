//! Integration tests for Layer 1: Exercise
//!
//! Tests for tile chunking, distractor generation, and the mode engines.

mod chunker;
mod distractors;
mod engines;
