// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Posrange - generic sequence algorithms over position ranges.
//!
//! Every algorithm takes a sequence and a half-open range `[first, last)`
//! of `usize` positions, and returns positions, a [`Pair`] of positions, or
//! a `bool`. A search that fails returns `last`. Sequences are anything
//! implementing [`Sequence`] / [`SequenceMut`]: slices, arrays, `Vec` and
//! `VecDeque` out of the box.
//!
//! # Quick Start
//!
//! ```
//! use posrange::{partition_point, remove, rotate, search_n};
//!
//! let mut v = vec![1, 2, 2, 3, 2];
//! let end = remove(&mut v, 0, 5, &2);
//! assert_eq!(&v[..end], [1, 3]);
//!
//! let mut v = vec![1, 2, 3, 4, 5];
//! assert_eq!(rotate(&mut v, 0, 2, 5), 3);
//! assert_eq!(v, [3, 4, 5, 1, 2]);
//!
//! assert_eq!(search_n(&[4, 4, 4, 1, 4, 4], 0, 6, 3, &4), 0);
//! assert_eq!(partition_point(&[true, true, false, false], 0, 4, |b| *b), 2);
//! ```
//!
//! # Preconditions
//!
//! Invalid ranges, overlapping source and destination where not allowed,
//! and inconsistent predicates or orderings are caller errors. Cheap range
//! checks run as `debug_assert!`s; out-of-bounds positions panic on
//! indexing. Degenerate but valid inputs (empty ranges, zero counts) are
//! always well-defined no-ops or sentinel returns.

pub mod harness;
pub mod pair;
pub mod partition;
pub mod primitives;
pub mod query;
pub mod restructure;
pub mod rotate;
pub mod search;
pub mod sequence;

pub use pair::*;
pub use partition::*;
pub use primitives::*;
pub use query::*;
pub use restructure::*;
pub use rotate::*;
pub use search::*;
pub use sequence::{Sequence, SequenceMut, begin, end};
