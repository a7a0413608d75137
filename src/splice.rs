// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional removal and replacement that never panic.
//!
//! Both operations leave the source untouched and return [`Cow`]:
//! `Cow::Owned` carries the edited copy, `Cow::Borrowed` hands the
//! source back unchanged when the request falls outside the sequence.
//! Out-of-range indices are expected inputs here (stale UI positions,
//! data that shrank between lookup and edit), so the functions absorb
//! them instead of asking every caller to pre-validate.
//!
//! Indices are `isize` because negative positions are part of the
//! contract, not a type error to rule out.
//!
//! # Branch map
//!
//! | Input                      | `remove_element_at`      | `replace_element_at`        |
//! |----------------------------|--------------------------|-----------------------------|
//! | `index < 0`                | borrowed source          | borrowed source             |
//! | empty source               | borrowed source          | borrowed source             |
//! | single element, any index  | per general rules        | `[value]`                   |
//! | `index` in `0..len`        | copy minus that element  | copy with `value` at index  |
//! | `index == len`             | unchanged copy           | copy with `value` appended  |
//! | `index > len`              | borrowed source          | copy with `value` appended  |

use std::borrow::Cow;

/// Copy of `source` without the element at `index`.
///
/// Negative or past-one-past-the-end indices return the source itself as
/// `Cow::Borrowed`; `index == len` returns an unchanged owned copy.
/// Every in-range index shortens the result by exactly one.
///
/// ```
/// use std::borrow::Cow;
/// use seqtools::remove_element_at;
///
/// let items = vec!["a", "b", "c"];
/// assert_eq!(remove_element_at(&items, 1).as_ref(), ["a", "c"]);
/// assert!(matches!(remove_element_at(&items, -1), Cow::Borrowed(_)));
/// ```
pub fn remove_element_at<T: Clone>(source: &[T], index: isize) -> Cow<'_, [T]> {
    let len = source.len();
    if index < 0 || index as usize > len {
        return Cow::Borrowed(source);
    }

    let index = index as usize;
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&source[..index]);
    if index < len {
        out.extend_from_slice(&source[index + 1..]);
    }

    debug_assert!(
        out.len() == len.saturating_sub(usize::from(index < len)),
        "removal changes length by at most one"
    );
    Cow::Owned(out)
}

/// Copy of `source` with `value` at `index`.
///
/// Negative indices and empty sources return the source itself as
/// `Cow::Borrowed`. A single-element source collapses to `[value]` for
/// any non-negative index. Indices at or past `len` append instead of
/// replacing, growing the result by one.
///
/// ```
/// use seqtools::replace_element_at;
///
/// let items = vec![10, 20, 30];
/// assert_eq!(replace_element_at(&items, 1, 99).as_ref(), [10, 99, 30]);
/// assert_eq!(replace_element_at(&items, 7, 99).as_ref(), [10, 20, 30, 99]);
/// ```
pub fn replace_element_at<T: Clone>(source: &[T], index: isize, value: T) -> Cow<'_, [T]> {
    let len = source.len();
    if len == 0 || index < 0 {
        return Cow::Borrowed(source);
    }
    if len == 1 {
        return Cow::Owned(vec![value]);
    }

    let index = index as usize;
    let mut out = Vec::with_capacity(len + 1);
    out.extend_from_slice(&source[..index.min(len)]);
    out.push(value);
    if index + 1 < len {
        out.extend_from_slice(&source[index + 1..]);
    }

    debug_assert!(
        out.len() == if index < len { len } else { len + 1 },
        "in-range replacement preserves length, past-end appends one"
    );
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Vec<i32> {
        vec![10, 20, 30, 40]
    }

    #[test]
    fn test_remove_in_range() {
        let items = source();
        assert_eq!(remove_element_at(&items, 0).as_ref(), [20, 30, 40]);
        assert_eq!(remove_element_at(&items, 2).as_ref(), [10, 20, 40]);
        assert_eq!(remove_element_at(&items, 3).as_ref(), [10, 20, 30]);
    }

    #[test]
    fn test_remove_at_len_is_owned_noop() {
        let items = source();
        let out = remove_element_at(&items, 4);
        assert_eq!(out.as_ref(), items.as_slice());
        assert!(matches!(out, Cow::Owned(_)));
    }

    #[test]
    fn test_remove_out_of_range_borrows_source() {
        let items = source();
        for index in [-1, -100, 5, isize::MAX] {
            let out = remove_element_at(&items, index);
            assert!(matches!(out, Cow::Borrowed(_)), "index {}", index);
            assert!(std::ptr::eq(out.as_ref(), items.as_slice()));
        }
    }

    #[test]
    fn test_remove_from_empty() {
        let items: Vec<i32> = Vec::new();
        assert!(matches!(remove_element_at(&items, -1), Cow::Borrowed(_)));
        assert!(matches!(remove_element_at(&items, 1), Cow::Borrowed(_)));
        // Index 0 on an empty slice is the `index == len` no-op copy.
        let out = remove_element_at(&items, 0);
        assert!(out.is_empty());
        assert!(matches!(out, Cow::Owned(_)));
    }

    #[test]
    fn test_remove_leaves_source_untouched() {
        let items = source();
        let _ = remove_element_at(&items, 1);
        assert_eq!(items, source());
    }

    #[test]
    fn test_replace_in_range() {
        let items = source();
        assert_eq!(replace_element_at(&items, 0, 99).as_ref(), [99, 20, 30, 40]);
        assert_eq!(replace_element_at(&items, 2, 99).as_ref(), [10, 20, 99, 40]);
        assert_eq!(replace_element_at(&items, 3, 99).as_ref(), [10, 20, 30, 99]);
    }

    #[test]
    fn test_replace_past_end_appends() {
        let items = source();
        assert_eq!(replace_element_at(&items, 4, 99).as_ref(), [10, 20, 30, 40, 99]);
        assert_eq!(replace_element_at(&items, 100, 99).as_ref(), [10, 20, 30, 40, 99]);
    }

    #[test]
    fn test_replace_negative_borrows_source() {
        let items = source();
        let out = replace_element_at(&items, -3, 99);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(out.as_ref(), items.as_slice()));
    }

    #[test]
    fn test_replace_on_empty_borrows_source() {
        let items: Vec<i32> = Vec::new();
        assert!(matches!(replace_element_at(&items, 0, 99), Cow::Borrowed(_)));
        assert!(matches!(replace_element_at(&items, 5, 99), Cow::Borrowed(_)));
    }

    #[test]
    fn test_replace_single_element_collapses() {
        let items = vec![7];
        assert_eq!(replace_element_at(&items, 0, 99).as_ref(), [99]);
        assert_eq!(replace_element_at(&items, 40, 99).as_ref(), [99]);
    }

    #[test]
    fn test_replace_leaves_source_untouched() {
        let items = source();
        let _ = replace_element_at(&items, 2, 0);
        assert_eq!(items, source());
    }

    #[test]
    fn test_clone_on_write_only_when_edited() {
        let items = source();
        assert!(matches!(remove_element_at(&items, 1), Cow::Owned(_)));
        assert!(matches!(replace_element_at(&items, 1, 0), Cow::Owned(_)));
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// These proofs provide mathematical certainty that the splice functions
// cannot panic on any index, including negative and far-out-of-range
// ones. Run with: cargo kani

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const MAX_LEN: usize = 4;

    /// Verify remove_element_at never panics and obeys its length contract.
    ///
    /// Properties verified:
    /// - No panics for any isize index
    /// - Out-of-range indices hand back the borrowed source
    /// - In-range indices shrink the copy by exactly one
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2 for the fill loop
    fn verify_remove_element_at_total() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut data = [0i32; MAX_LEN];
        for i in 0..len {
            data[i] = kani::any();
        }
        let source = &data[..len];
        let index: isize = kani::any();

        // This must not panic
        let out = remove_element_at(source, index);

        if index < 0 || index as usize > len {
            kani::assert(
                matches!(out, Cow::Borrowed(_)),
                "out-of-range removal must borrow the source",
            );
            kani::assert(out.len() == len, "borrowed source keeps its length");
        } else if index as usize == len {
            kani::assert(out.len() == len, "removal at len is a no-op copy");
        } else {
            kani::assert(out.len() + 1 == len, "in-range removal drops one element");
        }
    }

    /// Verify replace_element_at never panics and obeys its length contract.
    ///
    /// Properties verified:
    /// - No panics for any isize index
    /// - Negative index or empty source hands back the borrowed source
    /// - Single-element sources collapse to one element
    /// - Otherwise the copy has len elements (in range) or len + 1 (append)
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2 for the fill loop
    fn verify_replace_element_at_total() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut data = [0i32; MAX_LEN];
        for i in 0..len {
            data[i] = kani::any();
        }
        let source = &data[..len];
        let index: isize = kani::any();
        let value: i32 = kani::any();

        // This must not panic
        let out = replace_element_at(source, index, value);

        if len == 0 || index < 0 {
            kani::assert(
                matches!(out, Cow::Borrowed(_)),
                "negative index or empty source must borrow",
            );
        } else if len == 1 {
            kani::assert(out.len() == 1, "single-element source stays single");
        } else if (index as usize) < len {
            kani::assert(out.len() == len, "in-range replacement preserves length");
        } else {
            kani::assert(out.len() == len + 1, "past-end replacement appends");
        }
    }
}
