// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Reversal, rotation and shifting.
//!
//! All in-place operations here rearrange elements with swaps only, so they
//! need no `Clone` bound and use O(1) extra space. The `_copy` forms clone
//! into a separate destination.

use crate::primitives::copy;
use crate::sequence::{Sequence, SequenceMut, debug_check_range, debug_check_split};

/// Reverse `[first, last)` in place with `(last - first) / 2` swaps.
pub fn reverse<S>(seq: &mut S, mut first: usize, mut last: usize)
where
    S: SequenceMut + ?Sized,
{
    debug_check_range(seq, first, last);
    while last - first > 1 {
        last -= 1;
        seq.swap(first, last);
        first += 1;
    }
}

/// Write `[first, last)` reversed into `dest` starting at `d_first`.
pub fn reverse_copy<S, D>(
    src: &S,
    first: usize,
    mut last: usize,
    dest: &mut D,
    d_first: usize,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    debug_check_range(src, first, last);
    let mut d = d_first;
    while last != first {
        last -= 1;
        dest.assign(d, src.at(last).clone());
        d += 1;
    }
    return d;
}

/// Left-rotate `[first, last)` so that `middle` becomes the first element.
///
/// Returns the new position of the element originally at `first`, which is
/// `first + (last - middle)`. When `first == middle` this is `last`, and
/// when `middle == last` it is `first`; both are no-ops.
///
/// A write cursor and a read cursor walk forward swapping. Whenever the
/// write cursor reaches the start of the block still being read, that
/// block's unfinished remainder becomes the next round's rotation. Every
/// swap puts at least one element in its final place, so the total is
/// under `last - first` swaps with no recursion.
pub fn rotate<S>(seq: &mut S, first: usize, middle: usize, last: usize) -> usize
where
    S: SequenceMut + ?Sized,
{
    debug_check_split(seq, first, middle, last);
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }
    let result = first + (last - middle);

    let mut first = first;
    let mut middle = middle;
    while first != middle && middle != last {
        let mut write = first;
        let mut next_read = first;
        for read in middle..last {
            if write == next_read {
                next_read = read;
            }
            seq.swap(write, read);
            write += 1;
        }
        first = write;
        middle = next_read;
    }
    return result;
}

/// Write the rotation of `[first, last)` around `middle` into `dest`:
/// `[middle, last)` followed by `[first, middle)`.
pub fn rotate_copy<S, D>(
    src: &S,
    first: usize,
    middle: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    debug_check_split(src, first, middle, last);
    let d = copy(src, middle, last, dest, d_first);
    return copy(src, first, middle, dest, d);
}

/// Move `[first + n, last)` down to `first`, dropping the first `n`
/// elements. Returns the new logical end, `last - n`.
///
/// No-op returning `last` when `n == 0`, or `first` when `n >= last - first`.
/// The dropped elements end up in `[last - n, last)` in unspecified order.
pub fn shift_left<S>(seq: &mut S, first: usize, last: usize, n: usize) -> usize
where
    S: SequenceMut + ?Sized,
{
    debug_check_range(seq, first, last);
    if n == 0 {
        return last;
    }
    if n >= last - first {
        return first;
    }
    let new_last = last - n;
    for write in first..new_last {
        seq.swap(write, write + n);
    }
    return new_last;
}

/// Move `[first, last - n)` up to `first + n`, dropping the last `n`
/// elements. Returns the new logical begin, `first + n`.
///
/// No-op returning `first` when `n == 0`, or `last` when `n >= last - first`.
/// Walks from the high end down so no element is overwritten before it is
/// read. The dropped elements end up in `[first, first + n)`.
pub fn shift_right<S>(seq: &mut S, first: usize, last: usize, n: usize) -> usize
where
    S: SequenceMut + ?Sized,
{
    debug_check_range(seq, first, last);
    if n == 0 {
        return first;
    }
    if n >= last - first {
        return last;
    }
    let new_first = first + n;
    for write in (new_first..last).rev() {
        seq.swap(write, write - n);
    }
    return new_first;
}
