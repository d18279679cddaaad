// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Textbook formulations of the rearranging algorithms.
//!
//! This crate collects alternative ways of computing the same results as the
//! main `posrange` algorithms. It is designed for:
//!
//! - Learning how the classic rotation and partition schemes differ
//! - Serving as independent references in the conformance suite
//! - Comparing swap counts and access patterns
//!
//! # Implementations
//!
//! | Implementation | Trait | Key Feature |
//! |----------------|-------|-------------|
//! | `SwapRecurse` | `Rotation` | Recursive write/read cursor swapping |
//! | `ThreeReversal` | `Rotation` | Reverse both blocks, then the whole |
//! | `Juggling` | `Rotation` | Follows gcd(n, k) permutation cycles |
//! | `Lomuto` | `Partitioner` | Single forward scan |
//! | `Hoare` | `Partitioner` | Two cursors closing in from both ends |
//! | `Buffered` | `Partitioner` | Stable, copies into two buffers |
//!
//! All implementations work on a slice plus positions `first..last`, and
//! return the same positions as their `posrange` counterparts.
//!
//! # Example
//!
//! ```
//! use pedagogy::rotate::{Juggling, Rotation};
//!
//! let mut v = [1, 2, 3, 4, 5];
//! assert_eq!(Juggling::rotate(&mut v, 0, 2, 5), 3);
//! assert_eq!(v, [3, 4, 5, 1, 2]);
//! ```

pub mod multiset;
pub mod partition;
pub mod rotate;
