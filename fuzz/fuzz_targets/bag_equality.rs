// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the equals_by laws.
//!
//! The containment-based equality must stay reflexive, symmetric,
//! order-blind, and representation-blind for arbitrary byte sequences.
//! Narrow u8 values collide often, which is exactly the duplicate-heavy
//! territory where a broken containment scan would slip.

#![no_main]

use im::Vector;
use libfuzzer_sys::fuzz_target;
use seqtools::{equals_by, SeqView};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (a, b) = input;

    // INVARIANT 1: Reflexive, even with duplicates
    assert!(
        equals_by(Some(SeqView::from(&a)), Some(SeqView::from(&a)), |n| *n),
        "sequence stopped equaling itself"
    );

    // INVARIANT 2: Symmetric
    let forward = equals_by(Some(SeqView::from(&a)), Some(SeqView::from(&b)), |n| *n);
    let backward = equals_by(Some(SeqView::from(&b)), Some(SeqView::from(&a)), |n| *n);
    assert_eq!(forward, backward, "equals_by lost symmetry");

    // INVARIANT 3: Order-blind
    let reversed: Vec<u8> = a.iter().rev().copied().collect();
    assert!(
        equals_by(Some(SeqView::from(&a)), Some(SeqView::from(&reversed)), |n| *n),
        "reversal changed the verdict"
    );

    // INVARIANT 4: Representation-blind
    let persistent: Vector<u8> = b.iter().copied().collect();
    let against_plain = equals_by(Some(SeqView::from(&a)), Some(SeqView::from(&b)), |n| *n);
    let against_persistent = equals_by(
        Some(SeqView::from(&a)),
        Some(SeqView::from(&persistent)),
        |n| *n,
    );
    assert_eq!(
        against_plain, against_persistent,
        "representation changed the verdict"
    );

    // INVARIANT 5: Unequal lengths can never be equal
    if a.len() != b.len() {
        assert!(!forward, "length mismatch slipped through");
    }
});
