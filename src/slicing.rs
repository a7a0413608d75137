// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix access and flattening.
//!
//! Small conveniences shared by callers that peel the front off a
//! sequence or collapse one level of nesting before handing data to the
//! core operations. All of them are total; short or empty inputs give
//! short or empty outputs.

/// First element, if any.
///
/// ```
/// use seqtools::head;
///
/// assert_eq!(head(&[4, 5, 6]), Some(&4));
/// assert_eq!(head::<i32>(&[]), None);
/// ```
pub fn head<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Copy of the first `n` elements, or all of them when fewer exist.
///
/// ```
/// use seqtools::take;
///
/// assert_eq!(take(&[1, 2, 3], 2), [1, 2]);
/// assert_eq!(take(&[1, 2, 3], 99), [1, 2, 3]);
/// ```
pub fn take<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq.iter().take(n).cloned().collect()
}

/// Flattens one level of nesting into a single sequence, preserving
/// outer-then-inner order.
///
/// The element type decides the depth: sequences of sequences come out
/// flat, and a deeper shape flattens one level per call.
///
/// ```
/// use seqtools::flatten_deep;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(flatten_deep(nested), [1, 2, 3]);
/// ```
pub fn flatten_deep<I, J, T>(nested: I) -> Vec<T>
where
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}
