// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A borrowed, representation-agnostic view of an ordered sequence.
//!
//! Call sites in this crate juggle two sequence shapes: contiguous slices
//! (`&[T]`, `&Vec<T>`) and the structurally shared [`im::Vector`]. A
//! [`SeqView`] wraps a borrow of either so that every read-only operation
//! is written once and dispatches per variant.
//!
//! | Variant        | Backing store     | `len()` cost | Element access    |
//! |----------------|-------------------|--------------|-------------------|
//! | `Plain`        | `&[T]`            | O(1)         | contiguous        |
//! | `Persistent`   | `&im::Vector<T>`  | O(1)         | chunked RRB tree  |
//!
//! # Invariants
//!
//! - **Closed set**: these two variants are the only representations the
//!   crate accepts. Adding a variant means every `match` below gets a new
//!   arm, so exhaustiveness is the point, not a chore.
//! - **Value semantics**: a view is a pair of words. It is `Copy`, never
//!   owns elements, and never clones them unless the caller asks.
//! - **Uniform rendering**: `Debug`, `PartialEq`, and `Serialize` go
//!   through [`SeqView::iter`], so both representations print, compare,
//!   and serialize identically. Two views are equal iff they hold the
//!   same elements in the same order, regardless of variant.

use std::fmt;

use im::Vector;
use serde::ser::{Serialize, Serializer};

// ============================================================================
// SEQVIEW
// ============================================================================

/// Borrowed view over either sequence representation.
///
/// Construct one with `From`/`Into` rather than naming a variant:
///
/// ```
/// use seqtools::SeqView;
///
/// let plain = vec![1, 2, 3];
/// let persistent = im::vector![1, 2, 3];
///
/// let a = SeqView::from(&plain);
/// let b = SeqView::from(&persistent);
/// assert_eq!(a, b);
/// ```
pub enum SeqView<'a, T> {
    /// A contiguous slice, also reachable from `&Vec<T>` and `&[T; N]`.
    Plain(&'a [T]),
    /// A persistent vector; cheap to snapshot, never mutated through here.
    Persistent(&'a Vector<T>),
}

impl<'a, T: Clone> SeqView<'a, T> {
    /// Number of elements. O(1) for both variants.
    pub fn len(&self) -> usize {
        match self {
            SeqView::Plain(slice) => slice.len(),
            SeqView::Persistent(vector) => vector.len(),
        }
    }

    /// True when the view holds no elements.
    pub fn is_empty(&self) -> bool {
        match self {
            SeqView::Plain(slice) => slice.is_empty(),
            SeqView::Persistent(vector) => vector.is_empty(),
        }
    }

    /// Front-to-back iterator over borrowed elements.
    ///
    /// Tied to the underlying storage (`'a`), not to `self`, so callers
    /// can keep iterating after the view value goes out of scope.
    pub fn iter(&self) -> SeqIter<'a, T> {
        match self {
            SeqView::Plain(slice) => SeqIter::Plain(slice.iter()),
            SeqView::Persistent(vector) => SeqIter::Persistent(vector.iter()),
        }
    }

    /// True when any element satisfies `pred`. Short-circuits.
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(pred)
    }
}

impl<'a, T> Clone for SeqView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

// Manual impl: the derive would demand `T: Copy`, but a view only copies
// the borrow, never the elements.
impl<'a, T> Copy for SeqView<'a, T> {}

impl<'a, T: Clone + fmt::Debug> fmt::Debug for SeqView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Order-sensitive, element-wise equality across any variant pairing.
impl<'a, 'b, T: Clone + PartialEq> PartialEq<SeqView<'b, T>> for SeqView<'a, T> {
    fn eq(&self, other: &SeqView<'b, T>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, T: Clone + Eq> Eq for SeqView<'a, T> {}

/// Serializes as a plain sequence, so both variants produce identical
/// wire output. `[1, 2, 3]` in JSON whether the backing store is a slice
/// or a persistent vector.
impl<'a, T: Clone + Serialize> Serialize for SeqView<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl<'a, T> From<&'a [T]> for SeqView<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        SeqView::Plain(slice)
    }
}

impl<'a, T> From<&'a Vec<T>> for SeqView<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        SeqView::Plain(vec.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SeqView<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        SeqView::Plain(array.as_slice())
    }
}

impl<'a, T> From<&'a Vector<T>> for SeqView<'a, T> {
    fn from(vector: &'a Vector<T>) -> Self {
        SeqView::Persistent(vector)
    }
}

impl<'a, T: Clone> IntoIterator for SeqView<'a, T> {
    type Item = &'a T;
    type IntoIter = SeqIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// SEQITER
// ============================================================================

/// Iterator returned by [`SeqView::iter`].
///
/// Wraps whichever backing iterator the variant needs; both report exact
/// sizes, so this does too.
pub enum SeqIter<'a, T> {
    Plain(std::slice::Iter<'a, T>),
    Persistent(im::vector::Iter<'a, T>),
}

impl<'a, T: Clone> Iterator for SeqIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            SeqIter::Plain(iter) => iter.next(),
            SeqIter::Persistent(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SeqIter::Plain(iter) => iter.size_hint(),
            SeqIter::Persistent(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T: Clone> ExactSizeIterator for SeqIter<'a, T> {}
