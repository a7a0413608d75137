// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for sort_by_string ordering invariants.
//!
//! Arbitrary optional keys, including empty strings and non-ASCII input,
//! must sort into a sequence where blank keys trail and non-blank keys
//! are ordered under the selected case mode. A comparator that is not a
//! total order makes the standard sort panic, so surviving the fuzzer is
//! the proof that key folding stays consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqtools::sort_by_string;

fn folded(key: &Option<String>, case_sensitive: bool) -> Option<String> {
    key.as_ref().filter(|k| !k.is_empty()).map(|k| {
        if case_sensitive {
            k.clone()
        } else {
            k.to_lowercase()
        }
    })
}

fuzz_target!(|input: (Vec<Option<String>>, bool)| {
    let (keys, case_sensitive) = input;

    // Pair each key with its original position to observe stability.
    let mut items: Vec<(usize, Option<String>)> = keys.into_iter().enumerate().collect();

    // This must not panic, whatever the keys contain
    sort_by_string(&mut items, |(_, key)| key.clone(), case_sensitive);

    // INVARIANT 1: Blank keys all trail the non-blank ones
    let mut seen_blank = false;
    for (_, key) in &items {
        let blank = folded(key, case_sensitive).is_none();
        assert!(!seen_blank || blank, "non-blank key after a blank one");
        seen_blank |= blank;
    }

    // INVARIANT 2: Non-blank neighbors are ordered under the case mode
    for pair in items.windows(2) {
        if let (Some(a), Some(b)) = (
            folded(&pair[0].1, case_sensitive),
            folded(&pair[1].1, case_sensitive),
        ) {
            assert!(a <= b, "adjacent keys out of order: {:?} > {:?}", a, b);
        }
    }

    // INVARIANT 3: Ties keep their original relative order (stability)
    for pair in items.windows(2) {
        let a = folded(&pair[0].1, case_sensitive);
        let b = folded(&pair[1].1, case_sensitive);
        if a == b {
            assert!(pair[0].0 < pair[1].0, "stable sort reordered a tie");
        }
    }
});
