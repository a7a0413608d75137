// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place lexicographic sort over a projected string key.
//!
//! [`sort_by_string`] is the one operation in this crate that mutates its
//! input, and the `&mut [T]` parameter is the flag for it: everything
//! else borrows shared. Mutation is deliberate here because the dominant
//! callers re-sort the same buffer many times and a copying sort would
//! churn allocations for no benefit.
//!
//! The sort is the standard library's stable `sort_by`, so elements whose
//! keys compare equal keep their original relative order. Callers rely on
//! that for tie-breaking by insertion order.
//!
//! # Key handling
//!
//! The selector returns `Option<String>`; `None` and `""` are the same
//! thing, a blank key. Blank keys always sink to the end of the sequence,
//! whichever side of a comparison they land on, and compare equal to each
//! other. Case folding for the insensitive mode is full Unicode
//! `to_lowercase`, not ASCII-only.

use std::cmp::Ordering;

/// Sorts `seq` in place, ordering elements by the string key `selector`
/// extracts, and returns the same slice for call-site chaining.
///
/// With `case_sensitive` false (the common mode), keys are compared
/// lowercased. Blank keys (`None` or empty) order after every non-blank
/// key. The sort is stable.
///
/// ```
/// use seqtools::sort_by_string;
///
/// let mut names = vec!["banana", "Apple", "", "cherry"];
/// sort_by_string(&mut names, |s| Some(s.to_string()), false);
/// assert_eq!(names, ["Apple", "banana", "cherry", ""]);
/// ```
pub fn sort_by_string<T, F>(seq: &mut [T], selector: F, case_sensitive: bool) -> &mut [T]
where
    F: Fn(&T) -> Option<String>,
{
    seq.sort_by(|a, b| compare_keys(selector(a), selector(b), case_sensitive));
    seq
}

/// Total order on optional keys: blank sorts last, otherwise plain or
/// case-folded string order.
fn compare_keys(a: Option<String>, b: Option<String>, case_sensitive: bool) -> Ordering {
    let a = a.filter(|key| !key.is_empty());
    let b = b.filter(|key| !key.is_empty());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) if case_sensitive => a.cmp(&b),
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
