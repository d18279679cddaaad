// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Elementary single-pass primitives: count, copy, swap, transform,
//! replace, fill, generate.
//!
//! Copy-style functions read from a source sequence and write into a
//! separate destination starting at `d_first`, returning one past the last
//! written destination position. The destination must already be long
//! enough; these functions overwrite, they never grow a sequence.

use crate::sequence::{Sequence, SequenceMut, debug_check_range};

/// Number of elements in `[first, last)` equal to `value`.
pub fn count<S>(seq: &S, first: usize, last: usize, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    return count_if(seq, first, last, |x| x == value);
}

/// Number of elements in `[first, last)` satisfying `pred`.
pub fn count_if<S, P>(seq: &S, first: usize, last: usize, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    debug_check_range(seq, first, last);
    let mut total = 0;
    for pos in first..last {
        if pred(seq.at(pos)) {
            total += 1;
        }
    }
    return total;
}

/// Call `f` on every element of `[first, last)` in order, returning `f`.
pub fn for_each<S, F>(seq: &S, first: usize, last: usize, mut f: F) -> F
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    debug_check_range(seq, first, last);
    for pos in first..last {
        f(seq.at(pos));
    }
    return f;
}

/// Copy `[first, last)` of `src` to `dest` starting at `d_first`.
pub fn copy<S, D>(src: &S, first: usize, last: usize, dest: &mut D, d_first: usize) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    debug_check_range(src, first, last);
    let mut d = d_first;
    for pos in first..last {
        dest.assign(d, src.at(pos).clone());
        d += 1;
    }
    return d;
}

/// Copy the elements of `[first, last)` that satisfy `pred`.
pub fn copy_if<S, D, P>(
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
    debug_check_range(src, first, last);
    let mut d = d_first;
    for pos in first..last {
        let item = src.at(pos);
        if pred(item) {
            dest.assign(d, item.clone());
            d += 1;
        }
    }
    return d;
}

/// Copy `count` elements starting at `first`.
pub fn copy_n<S, D>(src: &S, first: usize, count: usize, dest: &mut D, d_first: usize) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    return copy(src, first, first + count, dest, d_first);
}

/// Copy `[first, last)` so that the last element lands at `d_last - 1`,
/// writing back to front. Returns the position of the first written element.
pub fn copy_backward<S, D>(
    src: &S,
    first: usize,
    mut last: usize,
    dest: &mut D,
    mut d_last: usize,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
{
    debug_check_range(src, first, last);
    while first != last {
        last -= 1;
        d_last -= 1;
        dest.assign(d_last, src.at(last).clone());
    }
    return d_last;
}

/// Exchange the elements at positions `a` and `b` of one sequence.
#[inline]
pub fn iter_swap<S: SequenceMut + ?Sized>(seq: &mut S, a: usize, b: usize) {
    seq.swap(a, b);
}

/// Exchange `[first1, last1)` of `a` element-wise with the range of `b`
/// starting at `first2`. Returns one past the last swapped position in `b`.
pub fn swap_ranges<A, B>(a: &mut A, first1: usize, last1: usize, b: &mut B, first2: usize) -> usize
where
    A: SequenceMut + ?Sized,
    B: SequenceMut<Item = A::Item> + ?Sized,
{
    debug_check_range(a, first1, last1);
    let mut d = first2;
    for pos in first1..last1 {
        std::mem::swap(a.at_mut(pos), b.at_mut(d));
        d += 1;
    }
    return d;
}

/// Write `op(x)` for every `x` in `[first, last)` to `dest`.
pub fn transform<S, D, F>(
    src: &S,
    first: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
    mut op: F,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    F: FnMut(&S::Item) -> D::Item,
{
    debug_check_range(src, first, last);
    let mut d = d_first;
    for pos in first..last {
        dest.assign(d, op(src.at(pos)));
        d += 1;
    }
    return d;
}

/// Write `op(x, y)` for paired elements of two ranges to `dest`.
#[allow(clippy::too_many_arguments)]
pub fn transform2<A, B, D, F>(
    a: &A,
    first1: usize,
    last1: usize,
    b: &B,
    first2: usize,
    dest: &mut D,
    d_first: usize,
    mut op: F,
) -> usize
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    D: SequenceMut + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> D::Item,
{
    debug_check_range(a, first1, last1);
    let mut d = d_first;
    let mut other = first2;
    for pos in first1..last1 {
        dest.assign(d, op(a.at(pos), b.at(other)));
        other += 1;
        d += 1;
    }
    return d;
}

/// Replace every element equal to `old_value` with a clone of `new_value`.
pub fn replace<S>(seq: &mut S, first: usize, last: usize, old_value: &S::Item, new_value: &S::Item)
where
    S: SequenceMut + ?Sized,
    S::Item: PartialEq + Clone,
{
    replace_if(seq, first, last, |x| x == old_value, new_value);
}

/// Replace every element satisfying `pred` with a clone of `new_value`.
pub fn replace_if<S, P>(seq: &mut S, first: usize, last: usize, mut pred: P, new_value: &S::Item)
where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    debug_check_range(seq, first, last);
    for pos in first..last {
        if pred(seq.at(pos)) {
            seq.assign(pos, new_value.clone());
        }
    }
}

/// Copy `[first, last)` to `dest`, substituting `new_value` for `old_value`.
pub fn replace_copy<S, D>(
    src: &S,
    first: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
    old_value: &S::Item,
    new_value: &S::Item,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: PartialEq + Clone,
{
    return replace_copy_if(src, first, last, dest, d_first, |x| x == old_value, new_value);
}

/// Copy `[first, last)` to `dest`, substituting `new_value` where `pred` holds.
pub fn replace_copy_if<S, D, P>(
    src: &S,
    first: usize,
    last: usize,
    dest: &mut D,
    d_first: usize,
    mut pred: P,
    new_value: &S::Item,
) -> usize
where
    S: Sequence + ?Sized,
    D: SequenceMut<Item = S::Item> + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    return transform(src, first, last, dest, d_first, |x| {
        if pred(x) {
            return new_value.clone();
        }
        return x.clone();
    });
}

/// Assign a clone of `value` to every position of `[first, last)`.
pub fn fill<S>(seq: &mut S, first: usize, last: usize, value: &S::Item)
where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
{
    generate(seq, first, last, || value.clone());
}

/// Assign `value` to `count` positions starting at `first`.
pub fn fill_n<S>(seq: &mut S, first: usize, count: usize, value: &S::Item) -> usize
where
    S: SequenceMut + ?Sized,
    S::Item: Clone,
{
    return generate_n(seq, first, count, || value.clone());
}

/// Assign successive results of `generator` to `[first, last)`.
pub fn generate<S, G>(seq: &mut S, first: usize, last: usize, mut generator: G)
where
    S: SequenceMut + ?Sized,
    G: FnMut() -> S::Item,
{
    debug_check_range(seq, first, last);
    for pos in first..last {
        seq.assign(pos, generator());
    }
}

/// Assign `count` generated values starting at `first`; returns `first + count`.
pub fn generate_n<S, G>(seq: &mut S, first: usize, count: usize, generator: G) -> usize
where
    S: SequenceMut + ?Sized,
    G: FnMut() -> S::Item,
{
    generate(seq, first, first + count, generator);
    return first + count;
}
