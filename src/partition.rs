// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Partitioning by a unary predicate.
//!
//! A range is partitioned by `pred` when every element satisfying `pred`
//! (the true group) precedes every element that does not (the false group).
//! The position of the first false-group element is the partition point.
//!
//! | Function | Stable | Swaps | Extra space |
//! |----------|--------|-------|-------------|
//! | `partition` | no | O(n) | O(1) |
//! | `stable_partition` | yes | O(n log n) | O(log n) stack |
//! | `partition_copy` | yes | none | two destinations |

use crate::pair::Pair;
use crate::query::{bisect, find_if_not, none_of};
use crate::rotate::rotate;
use crate::sequence::{Sequence, SequenceMut, debug_check_range};

/// True if `[first, last)` is partitioned by `pred`. True on an empty range.
pub fn is_partitioned<S, P>(seq: &S, first: usize, last: usize, mut pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let boundary = find_if_not(seq, first, last, &mut pred);
    return none_of(seq, boundary, last, pred);
}

/// Reorder `[first, last)` so the true group precedes the false group.
/// Returns the partition point. Not stable.
///
/// Skips the leading true run, then swaps each later true element down to
/// the boundary: exactly `last - first` predicate calls.
pub fn partition<S, P>(seq: &mut S, first: usize, last: usize, mut pred: P) -> usize
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut boundary = find_if_not(seq, first, last, &mut pred);
    if boundary == last {
        return last;
    }
    for pos in boundary + 1..last {
        if pred(seq.at(pos)) {
            seq.swap(boundary, pos);
            boundary += 1;
        }
    }
    return boundary;
}

/// Like [`partition`], but both groups keep their original relative order.
///
/// Splits the range in half, partitions each half recursively, then rotates
/// the left half's false group past the right half's true group. No element
/// buffer is allocated.
pub fn stable_partition<S, P>(seq: &mut S, first: usize, last: usize, mut pred: P) -> usize
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let start = find_if_not(seq, first, last, &mut pred);
    if start == last {
        return last;
    }
    return stable_partition_from_false(seq, start, last, &mut pred);
}

/// Requires `!pred(seq[first])`, so every call makes progress on a
/// non-empty range.
fn stable_partition_from_false<S, P>(seq: &mut S, first: usize, last: usize, pred: &mut P) -> usize
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let len = last - first;
    if len == 1 {
        return first;
    }
    let middle = first + len / 2;
    let left_split = stable_partition_from_false(seq, first, middle, pred);

    let mut right_split = find_if_not(seq, middle, last, &mut *pred);
    if right_split != last {
        right_split = stable_partition_from_false(seq, right_split, last, pred);
    }
    return rotate(seq, left_split, middle, right_split);
}

/// Copy true-group elements to `dest_true` and false-group elements to
/// `dest_false`, each in source order. Returns one past the last written
/// position of each destination.
#[allow(clippy::too_many_arguments)]
pub fn partition_copy<S, D1, D2, P>(
    src: &S,
    first: usize,
    last: usize,
    dest_true: &mut D1,
    d_first_true: usize,
    dest_false: &mut D2,
    d_first_false: usize,
    mut pred: P,
) -> Pair<usize, usize>
where
    S: Sequence + ?Sized,
    D1: SequenceMut<Item = S::Item> + ?Sized,
    D2: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    debug_check_range(src, first, last);
    let mut d_true = d_first_true;
    let mut d_false = d_first_false;
    for pos in first..last {
        let item = src.at(pos);
        if pred(item) {
            dest_true.assign(d_true, item.clone());
            d_true += 1;
        } else {
            dest_false.assign(d_false, item.clone());
            d_false += 1;
        }
    }
    return Pair::new(d_true, d_false);
}

/// Partition point of an already partitioned range, by binary search:
/// `log2(last - first) + 1` predicate calls at most.
pub fn partition_point<S, P>(seq: &S, first: usize, last: usize, pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    return bisect(seq, first, last, pred);
}
