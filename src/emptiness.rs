// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Length and emptiness checks that tolerate absent sequences.
//!
//! Everything here is total: an absent sequence (`None`) is an answerable
//! input, not an error. [`length`] reports it with the `-1` sentinel, the
//! emptiness predicates treat it as empty. Callers that already hold a
//! concrete view can stay in `Option`-free code by wrapping at the call
//! site, which keeps one set of functions serving both shapes.

use crate::view::SeqView;

/// Length of a possibly-absent sequence.
///
/// Returns `-1` when `seq` is `None`, otherwise the element count. The
/// sentinel is deliberate: it keeps the function total and lets callers
/// distinguish "absent" (`-1`) from "present but empty" (`0`) in one probe.
///
/// ```
/// use seqtools::{length, SeqView};
///
/// let items = vec![1, 2, 3];
/// assert_eq!(length(Some(SeqView::from(&items))), 3);
/// assert_eq!(length::<i32>(None), -1);
/// ```
pub fn length<T: Clone>(seq: Option<SeqView<'_, T>>) -> isize {
    match seq {
        Some(view) => view.len() as isize,
        None => -1,
    }
}

/// True when every given sequence is absent or has no elements.
///
/// Accepts any number of sequences; with none at all the answer is
/// vacuously `true`. Stops at the first non-empty sequence.
///
/// ```
/// use seqtools::{is_empty, SeqView};
///
/// let none: Vec<i32> = Vec::new();
/// let some = im::vector![1];
///
/// assert!(is_empty([Some(SeqView::from(&none)), None]));
/// assert!(!is_empty([Some(SeqView::from(&none)), Some(SeqView::from(&some))]));
/// ```
pub fn is_empty<'a, T, I>(seqs: I) -> bool
where
    T: Clone + 'a,
    I: IntoIterator<Item = Option<SeqView<'a, T>>>,
{
    seqs.into_iter()
        .all(|seq| seq.map_or(true, |view| view.is_empty()))
}

/// Exact negation of [`is_empty`]: true when at least one sequence holds
/// an element. With no sequences at all this is `false`.
pub fn is_not_empty<'a, T, I>(seqs: I) -> bool
where
    T: Clone + 'a,
    I: IntoIterator<Item = Option<SeqView<'a, T>>>,
{
    !is_empty(seqs)
}

/// Alias for [`is_not_empty`], kept for call sites that read better as a
/// question about content than about emptiness.
pub fn has_values<'a, T, I>(seqs: I) -> bool
where
    T: Clone + 'a,
    I: IntoIterator<Item = Option<SeqView<'a, T>>>,
{
    is_not_empty(seqs)
}
