//! Sequence utilities that treat plain and persistent collections alike.
//!
//! This crate provides small, total functions over ordered sequences: length
//! and emptiness probes that tolerate absent inputs, order-insensitive
//! equality under a projected key, panic-free positional splicing, an
//! in-place string sort, and a handful of selection helpers. Read-only
//! operations accept either a contiguous slice or an [`im::Vector`] through
//! one borrowed view, so call sites pick their storage and the semantics
//! stay identical.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────────────────────────────┐
//! │   view.rs    │────▶│ emptiness.rs   equality.rs                │
//! │  (SeqView,   │     │ (length, is_empty, ...)  (equals_by)      │
//! │   SeqIter)   │     └───────────────────────────────────────────┘
//! └──────────────┘
//!        slice-only operations, no view needed:
//! ┌───────────────────────────────────────────────────────────────┐
//! │ splice.rs      sorting.rs       setops.rs      slicing.rs     │
//! │ (remove/       (sort_by_string) (difference,   (head, take,   │
//! │  replace_                        intersection)  flatten_deep) │
//! │  element_at)                                   sampling.rs    │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module map
//!
//! | Module      | Operations                                    | Mutates? |
//! |-------------|-----------------------------------------------|----------|
//! | `view`      | `SeqView`, `SeqIter`                          | no       |
//! | `emptiness` | `length`, `is_empty`, `is_not_empty`, `has_values` | no  |
//! | `equality`  | `equals_by`                                   | no       |
//! | `splice`    | `remove_element_at`, `replace_element_at`     | no (copy-on-write) |
//! | `sorting`   | `sort_by_string`                              | **yes, in place** |
//! | `setops`    | `difference`, `intersection`, `intersection_with` | no   |
//! | `slicing`   | `head`, `take`, `flatten_deep`                | no       |
//! | `sampling`  | `sample`, `sample_size`                       | no       |
//!
//! # Design rules
//!
//! - **Total functions.** Nothing here panics or returns `Result`.
//!   Absent sequences, negative indices, and past-the-end positions are
//!   answered with sentinels: `-1` from [`length`], the borrowed source
//!   from the splice functions, `None` from [`head`] and [`sample`].
//! - **One mutator.** [`sort_by_string`] reorders its input in place and
//!   says so with `&mut [T]`; every other operation borrows shared and
//!   returns fresh data or the source itself.
//! - **No hidden machinery.** Comparisons are linear `PartialEq` scans,
//!   not hash sets; randomness comes from a caller-supplied RNG.
//!
//! # Usage
//!
//! ```
//! use seqtools::{equals_by, length, remove_element_at, SeqView};
//!
//! let playlist = vec!["intro", "theme", "outro"];
//! let cached = im::vector!["outro", "intro", "theme"];
//!
//! // Same items, different order and storage: equal under the identity key.
//! assert!(equals_by(
//!     Some(SeqView::from(&playlist)),
//!     Some(SeqView::from(&cached)),
//!     |s| *s,
//! ));
//!
//! assert_eq!(length(Some(SeqView::from(&playlist))), 3);
//!
//! // Splicing copies; the playlist itself is untouched.
//! let shorter = remove_element_at(&playlist, 1);
//! assert_eq!(shorter.as_ref(), ["intro", "outro"]);
//! assert_eq!(playlist.len(), 3);
//! ```

// Module declarations
mod emptiness;
mod equality;
mod sampling;
mod setops;
mod slicing;
mod sorting;
mod splice;
pub mod testing;
mod view;

// Re-exports for public API
pub use emptiness::{has_values, is_empty, is_not_empty, length};
pub use equality::equals_by;
pub use sampling::{sample, sample_size};
pub use setops::{difference, intersection, intersection_with};
pub use slicing::{flatten_deep, head, take};
pub use sorting::sort_by_string;
pub use splice::{remove_element_at, replace_element_at};
pub use view::{SeqIter, SeqView};
