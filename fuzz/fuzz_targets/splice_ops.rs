// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the splice functions.
//!
//! remove_element_at and replace_element_at promise totality: any index,
//! including isize extremes, must come back with a well-formed result and
//! an untouched source. The fuzzer hunts for the index arithmetic edge
//! cases that turn "total" into "panics on isize::MIN".

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqtools::{remove_element_at, replace_element_at};
use std::borrow::Cow;

fuzz_target!(|input: (Vec<i32>, isize, i32)| {
    let (source, index, value) = input;
    let snapshot = source.clone();
    let len = source.len();

    // These must not panic for any index
    let removed = remove_element_at(&source, index);
    let replaced = replace_element_at(&source, index, value);

    // INVARIANT 1: The source is never mutated
    assert_eq!(source, snapshot, "splice mutated its source");

    // INVARIANT 2: Removal shrinks by exactly one inside the range,
    // otherwise keeps the length
    if index >= 0 && (index as usize) < len {
        assert_eq!(removed.len() + 1, len, "in-range removal must drop one");
        // Prefix and suffix carry over untouched
        let index = index as usize;
        assert_eq!(&removed[..index], &source[..index]);
        assert_eq!(&removed[index..], &source[index + 1..]);
    } else {
        assert_eq!(removed.len(), len, "no-op removal must keep the length");
        assert_eq!(removed.as_ref(), source.as_slice());
    }

    // INVARIANT 3: Out-of-range removal hands back the borrowed source
    if index < 0 || index > len as isize {
        assert!(
            matches!(removed, Cow::Borrowed(_)),
            "out-of-range removal must borrow"
        );
    }

    // INVARIANT 4: Replacement length follows the branch table
    if len == 0 || index < 0 {
        assert!(
            matches!(replaced, Cow::Borrowed(_)),
            "unhandled replace input must borrow"
        );
    } else if len == 1 {
        assert_eq!(replaced.as_ref(), [value], "single element must collapse");
    } else if (index as usize) < len {
        assert_eq!(replaced.len(), len, "in-range replace keeps the length");
        assert_eq!(replaced[index as usize], value);
    } else {
        assert_eq!(replaced.len(), len + 1, "past-end replace appends");
        assert_eq!(replaced.last().copied(), Some(value));
    }
});
