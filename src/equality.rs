// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Order-insensitive equality over a caller-chosen key.
//!
//! [`equals_by`] answers "do these two sequences hold the same items?"
//! for call sites that treat sequences as bags: reordering is not a
//! difference, and identity lives in a projected key rather than the
//! whole element.
//!
//! # Containment, not multiset equality
//!
//! After the length gate, the check is mutual containment: every key of
//! `a` appears somewhere in `b` and vice versa. Containment ignores
//! multiplicity, so two same-length sequences that repeat different
//! elements can pass:
//!
//! ```
//! use seqtools::{equals_by, SeqView};
//!
//! let a = vec![1, 1, 2];
//! let b = vec![1, 2, 2];
//! assert!(equals_by(
//!     Some(SeqView::from(&a)),
//!     Some(SeqView::from(&b)),
//!     |n| *n,
//! ));
//! ```
//!
//! Long-standing call sites lean on exactly this behavior for
//! duplicate-free data, where containment and multiset equality
//! coincide. Changing it would be a silent semver break, so the scan
//! stays as-is and the quirk is documented here instead.
//!
//! # Cost
//!
//! O(n·m) key comparisons with no hashing and no allocation. The
//! sequences this crate serves are short enough that the nested scan
//! beats building hash sets, and it keeps the key type at
//! `PartialEq` instead of `Hash + Eq`.

use crate::view::SeqView;

/// True when `a` and `b` hold the same elements under `selector`,
/// ignoring order.
///
/// Two absent sequences are equal; an absent sequence never equals a
/// present one, not even an empty one. Present sequences must agree on
/// length and then contain each other's keys.
///
/// The selector runs once per element per containment probe; keep it
/// cheap or pre-project.
pub fn equals_by<'a, T, K, F>(
    a: Option<SeqView<'a, T>>,
    b: Option<SeqView<'a, T>>,
    selector: F,
) -> bool
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };

    if a.len() != b.len() {
        return false;
    }

    covered_by(a, b, &selector) && covered_by(b, a, &selector)
}

/// One direction of the containment scan: every key of `needle` occurs
/// in `hay`.
fn covered_by<'a, T, K, F>(needle: SeqView<'a, T>, hay: SeqView<'a, T>, selector: &F) -> bool
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    needle.iter().all(|item| {
        let key = selector(item);
        hay.any(|other| selector(other) == key)
    })
}
