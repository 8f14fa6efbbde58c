//! Integration tests for Layer 3: Runtime
//!
//! End-to-end tests running sessions from content loading to unlocks.

mod session;
