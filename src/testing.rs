//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test fixtures to avoid duplication.

#![doc(hidden)]

use im::Vector;
use serde::{Deserialize, Serialize};

/// A small record with an id and an optional display title, the shape
/// most call sites project with `equals_by` and `sort_by_string`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub title: Option<String>,
}

/// Create a track with a title.
///
/// This is the canonical fixture used across all tests.
pub fn track(id: u32, title: &str) -> Track {
    Track {
        id,
        title: Some(title.to_string()),
    }
}

/// Create a track with no title, for blank-key ordering tests.
pub fn untitled_track(id: u32) -> Track {
    Track { id, title: None }
}

/// Create a batch of titled tracks from `(id, title)` pairs.
pub fn tracks(pairs: &[(u32, &str)]) -> Vec<Track> {
    pairs.iter().map(|&(id, title)| track(id, title)).collect()
}

/// Rebuild a slice as a persistent vector, for cross-representation tests.
pub fn persistent<T: Clone>(items: &[T]) -> Vector<T> {
    items.iter().cloned().collect()
}

/// Ids of a track sequence in order, the usual post-sort assertion shape.
pub fn ids(items: &[Track]) -> Vec<u32> {
    items.iter().map(|t| t.id).collect()
}
