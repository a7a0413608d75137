// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Difference and intersection over plain sequences.
//!
//! Same simplicity charter as the rest of the crate: linear scans with
//! `PartialEq` (or a caller comparator), no hashing, no `Ord` or `Hash`
//! bounds smuggled in. Results are fresh `Vec`s ordered by first
//! appearance in the first argument, which is the ordering downstream
//! display code expects.

// ============================================================================
// DIFFERENCE
// ============================================================================

/// Elements of `a` that do not occur in `b`.
///
/// Keeps `a`'s order and duplicates; only membership in `b` filters.
///
/// ```
/// use seqtools::difference;
///
/// assert_eq!(difference(&[2, 1, 2], &[2, 3]), [1]);
/// ```
pub fn difference<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter()
        .filter(|&item| !b.contains(item))
        .cloned()
        .collect()
}

// ============================================================================
// INTERSECTION
// ============================================================================

/// Elements present in both `a` and `b`, deduplicated, in `a`'s
/// first-seen order.
///
/// ```
/// use seqtools::intersection;
///
/// assert_eq!(intersection(&[2, 1, 2], &[2, 3, 1]), [2, 1]);
/// ```
pub fn intersection<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in a {
        if b.contains(item) && !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// [`intersection`] with a caller-supplied comparator instead of
/// `PartialEq`.
///
/// The comparator decides both membership in `b` and deduplication
/// within the result, so "equal" means whatever the caller says it
/// means. Always called as `cmp(element_of_a, candidate)`.
///
/// ```
/// use seqtools::intersection_with;
///
/// let a = [1.0, 2.1, 3.9];
/// let b = [2.0, 4.0];
/// let close = |x: &f64, y: &f64| (x - y).abs() < 0.5;
/// assert_eq!(intersection_with(&a, &b, close), [2.1, 3.9]);
/// ```
pub fn intersection_with<T, F>(a: &[T], b: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut out: Vec<T> = Vec::new();
    for item in a {
        let in_b = b.iter().any(|other| cmp(item, other));
        if in_b && !out.iter().any(|kept| cmp(item, kept)) {
            out.push(item.clone());
        }
    }
    out
}
