//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use seqtools::SeqView;

// Re-export canonical test fixtures from seqtools::testing
pub use seqtools::testing::{ids, persistent, track, tracks, untitled_track, Track};

/// Wrap a slice as a view without spelling the variant at every call site.
pub fn view<T: Clone>(items: &[T]) -> SeqView<'_, T> {
    SeqView::from(items)
}

/// Deterministic RNG for sampling tests; same seed, same draws.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A permutation that displaces every element of a non-trivial sequence:
/// reverse, then rotate by one.
pub fn scrambled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    if !out.is_empty() {
        out.rotate_left(1);
    }
    out
}
