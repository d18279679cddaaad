// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Removal and deduplication.
//!
//! The in-place forms compact survivors toward `first` and return the new
//! logical end. Survivors keep their relative order. Elements are moved by
//! swapping, so `[new_end, last)` holds exactly the discarded elements in
//! an unspecified order: nothing is cloned or dropped, and the caller can
//! truncate or reuse the tail.
//!
//! The `_copy` forms leave the source untouched and clone survivors into a
//! destination sequence.

use crate::primitives::copy_if;
use crate::query::{adjacent_find_by, find_if};
use crate::sequence::{Sequence, SequenceMut, debug_check_range};

/// Remove every element equal to `value`; returns the new logical end.
pub fn remove<S>(seq: &mut S, first: usize, last: usize, value: &S::Item) -> usize
where
    S: SequenceMut + ?Sized,
    S::Item: PartialEq,
{
    return remove_if(seq, first, last, |x| x == value);
}

/// Remove every element satisfying `pred`; returns the new logical end.
///
/// One forward pass, `last - first` predicate calls, and at most one swap
/// per surviving element that follows the first removed one.
pub fn remove_if<S, P>(seq: &mut S, first: usize, last: usize, mut pred: P) -> usize
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut write = find_if(seq, first, last, &mut pred);
    if write == last {
        return last;
    }
    for read in write + 1..last {
        if !pred(seq.at(read)) {
            seq.swap(write, read);
            write += 1;
        }
    }
    return write;
}

/// Copy the elements not equal to `value` to `dest`.
pub fn remove_copy<S, D>(
    src: &S,
    first: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
    value: &S::Item,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: PartialEq + Clone,
{
    return remove_copy_if(src, first, last, dest, d_first, |x| x == value);
}

/// Copy the elements not satisfying `pred` to `dest`.
pub fn remove_copy_if<S, D, P>(
    src: &S,
    first: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
    mut pred: P,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    return copy_if(src, first, last, dest, d_first, |x| !pred(x));
}

/// Collapse each run of adjacent equal elements to its first member.
pub fn unique<S>(seq: &mut S, first: usize, last: usize) -> usize
where
    S: SequenceMut + ?Sized,
    S::Item: PartialEq,
{
    return unique_by(seq, first, last, |a, b| a == b);
}

/// Collapse each run of adjacent equivalent elements to its first member;
/// returns the new logical end.
///
/// `pred(kept, candidate)` is called with the most recently kept element and
/// the element under inspection, and must behave as an equivalence relation.
/// Nothing is written before the first duplicate.
pub fn unique_by<S, P>(seq: &mut S, first: usize, last: usize, mut pred: P) -> usize
where
    S: SequenceMut + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut kept = adjacent_find_by(seq, first, last, &mut pred);
    if kept == last {
        return last;
    }
    // seq[kept + 1] duplicates seq[kept]; scanning resumes after it.
    for read in kept + 2..last {
        if !pred(seq.at(kept), seq.at(read)) {
            kept += 1;
            seq.swap(kept, read);
        }
    }
    return kept + 1;
}

/// Copy `[first, last)` to `dest`, dropping adjacent duplicates.
pub fn unique_copy<S, D>(src: &S, first: usize, last: usize, dest: &mut D, d_first: usize) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: PartialEq + Clone,
{
    return unique_copy_by(src, first, last, dest, d_first, |a, b| a == b);
}

/// [`unique_copy`] under `pred(kept, candidate)`.
pub fn unique_copy_by<S, D, P>(
    src: &S,
    first: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
    mut pred: P,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    debug_check_range(src, first, last);
    if first == last {
        return d_first;
    }
    let mut kept = first;
    dest.assign(d_first, src.at(kept).clone());
    let mut d = d_first + 1;
    for read in first + 1..last {
        if !pred(src.at(kept), src.at(read)) {
            kept = read;
            dest.assign(d, src.at(kept).clone());
            d += 1;
        }
    }
    return d;
}
