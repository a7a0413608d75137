// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random selection from a sequence.
//!
//! The RNG is always a caller-supplied `&mut impl Rng`, never an
//! ambient thread-local grabbed in here. That keeps these functions
//! deterministic under a seeded generator, which is how every test in
//! this crate drives them, and leaves the entropy-source policy to the
//! application.

use rand::seq::SliceRandom;
use rand::Rng;

/// One uniformly chosen element, or `None` when the sequence is empty.
///
/// ```
/// use rand::SeedableRng;
/// use seqtools::sample;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let picked = sample(&[10, 20, 30], &mut rng).copied();
/// assert!(matches!(picked, Some(10 | 20 | 30)));
/// ```
pub fn sample<'a, T, R>(seq: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    seq.choose(rng)
}

/// Up to `amount` distinct positions sampled without replacement.
///
/// Asking for more elements than exist returns them all; the output
/// order is the sampler's, not the source's. Distinctness is positional,
/// so duplicate values in the source can both be picked.
pub fn sample_size<T, R>(seq: &[T], amount: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    seq.choose_multiple(rng, amount).cloned().collect()
}
