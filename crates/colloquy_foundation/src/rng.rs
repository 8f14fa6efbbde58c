//! The random source shared by distractor picking and shuffling.
//!
//! Everything random in Colloquy is generic over [`rand::Rng`]; this module
//! only fixes the concrete generator a session uses.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The concrete generator owned by a session.
pub type SessionRng = ChaCha8Rng;

/// Creates a deterministic source from a seed.
#[must_use]
pub fn seeded(seed: u64) -> SessionRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates an unpredictable source seeded from the operating system.
#[must_use]
pub fn from_entropy() -> SessionRng {
    ChaCha8Rng::from_entropy()
}

/// Derives an independent generator from `parent`.
///
/// Each exercise gets its own generator so it can be restarted without
/// touching the session's stream; the result is still fully determined by
/// the parent's seed.
#[must_use]
pub fn fork<R: RngCore + ?Sized>(parent: &mut R) -> SessionRng {
    ChaCha8Rng::seed_from_u64(parent.next_u64())
}
