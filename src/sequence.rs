// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Randomly addressable sequences and the position-range convention.
//!
//! Every algorithm in this crate takes a sequence plus a half-open range
//! `[first, last)` of positions. A position is a `usize` in `[0, len]`; the
//! value `len` is the one-past-the-end sentinel, used both as a bound and as
//! the "not found" result.
//!
//! Algorithms never take ownership of a sequence and never allocate. They
//! only need to read the element at a position, and for mutating
//! algorithms, swap or overwrite elements in place.

use std::collections::VecDeque;

/// A finite sequence addressable by position.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Number of elements; also the one-past-the-end position.
    fn len(&self) -> usize;

    /// Borrow the element at `pos`. Panics if `pos >= len()`.
    fn at(&self, pos: usize) -> &Self::Item;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

/// A sequence whose elements can be rearranged and overwritten in place.
pub trait SequenceMut: Sequence {
    /// Mutably borrow the element at `pos`. Panics if `pos >= len()`.
    fn at_mut(&mut self, pos: usize) -> &mut Self::Item;

    /// Exchange the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Overwrite the element at `pos`, dropping the old value.
    fn assign(&mut self, pos: usize, value: Self::Item) {
        *self.at_mut(pos) = value;
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return <[T]>::len(self);
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        return &self[pos];
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        return &mut self[pos];
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return N;
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        return &self[pos];
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        return &mut self[pos];
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return Vec::len(self);
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        return &self[pos];
    }
}

impl<T> SequenceMut for Vec<T> {
    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        return &mut self[pos];
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        return VecDeque::len(self);
    }

    #[inline]
    fn at(&self, pos: usize) -> &T {
        return &self[pos];
    }
}

impl<T> SequenceMut for VecDeque<T> {
    #[inline]
    fn at_mut(&mut self, pos: usize) -> &mut T {
        return &mut self[pos];
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Position of the first element: always 0.
#[inline]
pub fn begin<S: Sequence + ?Sized>(_seq: &S) -> usize {
    return 0;
}

/// One-past-the-end position of `seq`.
#[inline]
pub fn end<S: Sequence + ?Sized>(seq: &S) -> usize {
    return seq.len();
}

/// Debug-only check that `[first, last)` is a valid range of `seq`.
#[inline]
pub(crate) fn debug_check_range<S: Sequence + ?Sized>(seq: &S, first: usize, last: usize) {
    debug_assert!(first <= last, "inverted range [{}, {})", first, last);
    debug_assert!(
        last <= seq.len(),
        "range end {} past sequence length {}",
        last,
        seq.len()
    );
}

/// Debug-only check that `first <= middle <= last` and the range is valid.
#[inline]
pub(crate) fn debug_check_split<S: Sequence + ?Sized>(
    seq: &S,
    first: usize,
    middle: usize,
    last: usize,
) {
    debug_assert!(
        first <= middle && middle <= last,
        "middle {} outside [{}, {}]",
        middle,
        first,
        last
    );
    debug_check_range(seq, first, last);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<S: Sequence<Item = i32> + ?Sized>(seq: &S) -> i32 {
        let mut total = 0;
        for pos in begin(seq)..end(seq) {
            total += *seq.at(pos);
        }
        return total;
    }

    #[test]
    fn slices_vecs_arrays_and_deques_agree() {
        let v = vec![1, 2, 3, 4];
        let a = [1, 2, 3, 4];
        let d: VecDeque<i32> = v.iter().copied().collect();

        assert_eq!(sum(&v), 10);
        assert_eq!(sum(&a), 10);
        assert_eq!(sum(&d), 10);
        assert_eq!(sum(&v[1..3]), 5);
    }

    #[test]
    fn swap_and_assign() {
        let mut d: VecDeque<i32> = VecDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);

        SequenceMut::swap(&mut d, 0, 2);
        assert_eq!(d, [3, 2, 1]);

        d.assign(1, 7);
        assert_eq!(d, [3, 7, 1]);
    }

    #[test]
    fn empty_sequence_end_is_begin() {
        let v: Vec<u8> = Vec::new();
        assert!(Sequence::is_empty(&v));
        assert_eq!(begin(&v), end(&v));
    }

    #[test]
    #[should_panic]
    fn reading_past_the_end_panics() {
        let v = vec![1, 2, 3];
        let _ = Sequence::at(&v, 3);
    }
}
