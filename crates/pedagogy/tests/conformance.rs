// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Conformance suite for the textbook rotations and partitions.
//!
//! Every `Rotation` must agree exactly with `posrange::rotate`, and every
//! `Partitioner` must return the same partition point as
//! `posrange::partition`, keep the range's multiset, and (when stable)
//! agree exactly with `posrange::stable_partition`.
//!
//! # Usage
//!
//! To test a new implementation, add it to the `rotation_conformance!` or
//! `partition_conformance!` invocations at the bottom of this file.

use pedagogy::multiset::is_permutation_hashed;
use pedagogy::partition::{Buffered, Hoare, Lomuto, Partitioner};
use pedagogy::rotate::{Juggling, Rotation, SwapRecurse, ThreeReversal};
use proptest::prelude::*;

// =============================================================================
// Rotation checks
// =============================================================================

pub fn check_rotation_matches<R: Rotation>(v: &[u8], first: usize, middle: usize, last: usize) {
    let mut ours = v.to_vec();
    let mut reference = v.to_vec();
    let got = R::rotate(&mut ours, first, middle, last);
    let expected = posrange::rotate(&mut reference, first, middle, last);
    assert_eq!(got, expected, "{} returned the wrong position", R::NAME);
    assert_eq!(ours, reference, "{} produced the wrong order", R::NAME);
}

pub fn check_rotation_edges<R: Rotation>() {
    let mut empty: [u8; 0] = [];
    assert_eq!(R::rotate(&mut empty, 0, 0, 0), 0);

    let mut v = [1, 2, 3];
    assert_eq!(R::rotate(&mut v, 0, 0, 3), 3);
    assert_eq!(R::rotate(&mut v, 0, 3, 3), 0);
    assert_eq!(v, [1, 2, 3]);
}

/// Rotating by `k` then by `n - k` restores the input.
pub fn check_rotation_inverse<R: Rotation>(v: &[u8], k: usize) {
    let n = v.len();
    let mut w = v.to_vec();
    let point = R::rotate(&mut w, 0, k, n);
    R::rotate(&mut w, 0, point, n);
    assert_eq!(w, v, "{} rotation is not invertible", R::NAME);
}

// =============================================================================
// Partition checks
// =============================================================================

pub fn check_partition_matches<P: Partitioner<u8>>(v: &[u8], first: usize, last: usize, pivot: u8) {
    let pred = |x: &u8| *x < pivot;
    let mut ours = v.to_vec();
    let point = P::partition(&mut ours, first, last, pred);

    let mut reference = v.to_vec();
    let expected = posrange::partition(&mut reference, first, last, pred);
    assert_eq!(point, expected, "{} returned the wrong point", P::NAME);

    assert!(ours[first..point].iter().all(pred), "{} left a false element in front", P::NAME);
    assert!(!ours[point..last].iter().any(pred), "{} left a true element behind", P::NAME);
    assert!(
        is_permutation_hashed(&ours[first..last], &v[first..last]),
        "{} lost or duplicated elements",
        P::NAME
    );
    assert_eq!(ours[..first], v[..first], "{} touched the prefix", P::NAME);
    assert_eq!(ours[last..], v[last..], "{} touched the suffix", P::NAME);

    if P::STABLE {
        let mut stable = v.to_vec();
        posrange::stable_partition(&mut stable, first, last, pred);
        assert_eq!(ours, stable, "{} claims stability but reordered", P::NAME);
    }
}

pub fn check_partition_edges<P: Partitioner<u8>>() {
    let mut v = [1u8, 2, 3, 4];
    assert_eq!(P::partition(&mut v, 0, 4, |_| true), 4);
    assert_eq!(P::partition(&mut v, 0, 4, |_| false), 0);
    assert_eq!(P::partition(&mut v, 2, 2, |_| true), 2);
    assert_eq!(v, [1, 2, 3, 4]);
}

// =============================================================================
// Strategies
// =============================================================================

/// A byte vector with a valid split `first <= middle <= last <= len`.
fn split_input() -> impl Strategy<Value = (Vec<u8>, usize, usize, usize)> {
    prop::collection::vec(0u8..8, 0..64).prop_flat_map(|v| {
        let n = v.len();
        (Just(v), 0..=n).prop_flat_map(move |(v, a)| {
            (Just(v), Just(a), a..=n).prop_flat_map(move |(v, a, b)| {
                (Just(v), Just(a), Just(b), b..=n)
            })
        })
    })
}

// =============================================================================
// Implementation registrations
// =============================================================================

macro_rules! rotation_conformance {
    ($($name:ident => $imp:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn edges() {
                    check_rotation_edges::<$imp>();
                }

                #[test]
                fn every_split_small() {
                    for len in 0..9usize {
                        let v: Vec<u8> = (0..len as u8).collect();
                        for first in 0..=len {
                            for middle in first..=len {
                                for last in middle..=len {
                                    check_rotation_matches::<$imp>(&v, first, middle, last);
                                }
                            }
                        }
                    }
                }

                proptest! {
                    #![proptest_config(ProptestConfig::with_cases(200))]

                    #[test]
                    fn matches_posrange((v, first, middle, last) in split_input()) {
                        check_rotation_matches::<$imp>(&v, first, middle, last);
                    }

                    #[test]
                    fn inverse(
                        v in prop::collection::vec(any::<u8>(), 0..64),
                        k_frac in 0.0..=1.0f64,
                    ) {
                        let k = (k_frac * v.len() as f64) as usize;
                        check_rotation_inverse::<$imp>(&v, k.min(v.len()));
                    }
                }
            }
        )*
    };
}

macro_rules! partition_conformance {
    ($($name:ident => $imp:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn edges() {
                    check_partition_edges::<$imp>();
                }

                proptest! {
                    #![proptest_config(ProptestConfig::with_cases(200))]

                    #[test]
                    fn matches_posrange(
                        (v, first, _middle, last) in split_input(),
                        pivot in 0u8..9,
                    ) {
                        check_partition_matches::<$imp>(&v, first, last, pivot);
                    }
                }
            }
        )*
    };
}

rotation_conformance! {
    swap_recurse => SwapRecurse,
    three_reversal => ThreeReversal,
    juggling => Juggling,
}

partition_conformance! {
    lomuto => Lomuto,
    hoare => Hoare,
    buffered => Buffered,
}
