// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Read-only queries over a range: linear finds, quantifiers, adjacent
//! pairs, binary search on sorted ranges, and lockstep comparison of two
//! ranges.
//!
//! All returned positions are absolute (relative to the start of the
//! sequence, not to `first`). A failed search returns `last`.
//!
//! # Complexity
//!
//! | Function | Comparisons |
//! |----------|-------------|
//! | `find*`, `*_of`, `adjacent_find*` | at most `last - first` |
//! | `lower_bound*`, `upper_bound*`, `partition_point` | `log2(n) + 1` |
//! | `mismatch*`, `equal*` | at most the shorter range |
//! | `is_permutation*` | O(n²) worst case |

use std::cmp::Ordering;

use crate::pair::Pair;
use crate::primitives::count_if;
use crate::sequence::{Sequence, debug_check_range};

/// First position in `[first, last)` whose element equals `value`.
pub fn find<S>(seq: &S, first: usize, last: usize, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    return find_if(seq, first, last, |x| x == value);
}

/// First position in `[first, last)` whose element satisfies `pred`.
pub fn find_if<S, P>(seq: &S, mut first: usize, last: usize, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    debug_check_range(seq, first, last);
    while first != last && !pred(seq.at(first)) {
        first += 1;
    }
    return first;
}

/// First position in `[first, last)` whose element fails `pred`.
pub fn find_if_not<S, P>(seq: &S, first: usize, last: usize, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    return find_if(seq, first, last, |x| !pred(x));
}

/// True if every element satisfies `pred`. True on an empty range.
pub fn all_of<S, P>(seq: &S, first: usize, last: usize, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    return find_if_not(seq, first, last, pred) == last;
}

/// True if at least one element satisfies `pred`. False on an empty range.
pub fn any_of<S, P>(seq: &S, first: usize, last: usize, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    return find_if(seq, first, last, pred) != last;
}

/// True if no element satisfies `pred`. True on an empty range.
pub fn none_of<S, P>(seq: &S, first: usize, last: usize, pred: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    return find_if(seq, first, last, pred) == last;
}

/// First `i` such that `seq[i] == seq[i + 1]`, or `last`.
pub fn adjacent_find<S>(seq: &S, first: usize, last: usize) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    return adjacent_find_by(seq, first, last, |a, b| a == b);
}

/// First `i` such that `pred(seq[i], seq[i + 1])`, or `last` if there is no
/// such pair (including ranges shorter than two elements).
pub fn adjacent_find_by<S, P>(seq: &S, mut first: usize, last: usize, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, &S::Item) -> bool,
{
    debug_check_range(seq, first, last);
    if first == last {
        return last;
    }
    let mut next = first + 1;
    while next != last {
        if pred(seq.at(first), seq.at(next)) {
            return first;
        }
        first = next;
        next += 1;
    }
    return last;
}

/// Binary search for the first position in `[first, last)` whose element
/// fails `pred`, given that the range is partitioned by `pred`.
pub(crate) fn bisect<S, P>(seq: &S, mut first: usize, last: usize, mut pred: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    debug_check_range(seq, first, last);
    let mut len = last - first;
    while len > 0 {
        let half = len / 2;
        let mid = first + half;
        if pred(seq.at(mid)) {
            first = mid + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    return first;
}

/// First position whose element is not less than `value`.
pub fn lower_bound<S>(seq: &S, first: usize, last: usize, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    return lower_bound_by(seq, first, last, value, Ord::cmp);
}

/// First position whose element `e` has `cmp(e, value) != Less`.
pub fn lower_bound_by<S, C>(
    seq: &S,
    first: usize,
    last: usize,
    value: &S::Item,
    mut cmp: C,
) -> usize
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    return bisect(seq, first, last, |e| cmp(e, value) == Ordering::Less);
}

/// First position whose element is greater than `value`.
pub fn upper_bound<S>(seq: &S, first: usize, last: usize, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    return upper_bound_by(seq, first, last, value, Ord::cmp);
}

/// First position whose element `e` has `cmp(e, value) == Greater`.
pub fn upper_bound_by<S, C>(
    seq: &S,
    first: usize,
    last: usize,
    value: &S::Item,
    mut cmp: C,
) -> usize
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    return bisect(seq, first, last, |e| cmp(e, value) != Ordering::Greater);
}

/// The subrange of elements equivalent to `value`: `(lower_bound, upper_bound)`.
pub fn equal_range<S>(seq: &S, first: usize, last: usize, value: &S::Item) -> Pair<usize, usize>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    return equal_range_by(seq, first, last, value, Ord::cmp);
}

pub fn equal_range_by<S, C>(
    seq: &S,
    first: usize,
    last: usize,
    value: &S::Item,
    mut cmp: C,
) -> Pair<usize, usize>
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let lower = lower_bound_by(seq, first, last, value, &mut cmp);
    let upper = upper_bound_by(seq, lower, last, value, &mut cmp);
    return Pair::new(lower, upper);
}

/// True if the sorted range contains an element equivalent to `value`.
pub fn binary_search<S>(seq: &S, first: usize, last: usize, value: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    return binary_search_by(seq, first, last, value, Ord::cmp);
}

pub fn binary_search_by<S, C>(
    seq: &S,
    first: usize,
    last: usize,
    value: &S::Item,
    mut cmp: C,
) -> bool
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let pos = lower_bound_by(seq, first, last, value, &mut cmp);
    return pos != last && cmp(seq.at(pos), value) == Ordering::Equal;
}

/// Scan `[first1, last1)` and the range of `b` starting at `first2` in
/// lockstep; return the positions of the first unequal pair, or
/// `(last1, first2 + (last1 - first1))`. The second range must be at least
/// as long as the first.
pub fn mismatch<A, B>(
    a: &A,
    first1: usize,
    last1: usize,
    b: &B,
    first2: usize,
) -> Pair<usize, usize>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    return mismatch_by(a, first1, last1, b, first2, |x, y| x == y);
}

pub fn mismatch_by<A, B, P>(
    a: &A,
    mut first1: usize,
    last1: usize,
    b: &B,
    mut first2: usize,
    mut pred: P,
) -> Pair<usize, usize>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    debug_check_range(a, first1, last1);
    while first1 != last1 && pred(a.at(first1), b.at(first2)) {
        first1 += 1;
        first2 += 1;
    }
    return Pair::new(first1, first2);
}

/// Like [`mismatch`], but stops at whichever of `last1` / `last2` comes first.
pub fn mismatch2<A, B>(
    a: &A,
    first1: usize,
    last1: usize,
    b: &B,
    first2: usize,
    last2: usize,
) -> Pair<usize, usize>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    return mismatch2_by(a, first1, last1, b, first2, last2, |x, y| x == y);
}

#[allow(clippy::too_many_arguments)]
pub fn mismatch2_by<A, B, P>(
    a: &A,
    mut first1: usize,
    last1: usize,
    b: &B,
    mut first2: usize,
    last2: usize,
    mut pred: P,
) -> Pair<usize, usize>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    debug_check_range(a, first1, last1);
    debug_check_range(b, first2, last2);
    while first1 != last1 && first2 != last2 && pred(a.at(first1), b.at(first2)) {
        first1 += 1;
        first2 += 1;
    }
    return Pair::new(first1, first2);
}

/// True if `[first1, last1)` equals the equally long range of `b` at `first2`.
pub fn equal<A, B>(a: &A, first1: usize, last1: usize, b: &B, first2: usize) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    return equal_by(a, first1, last1, b, first2, |x, y| x == y);
}

pub fn equal_by<A, B, P>(a: &A, first1: usize, last1: usize, b: &B, first2: usize, pred: P) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    return mismatch_by(a, first1, last1, b, first2, pred).first == last1;
}

/// True if both ranges have the same length and compare equal element-wise.
pub fn equal2<A, B>(a: &A, first1: usize, last1: usize, b: &B, first2: usize, last2: usize) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    return equal2_by(a, first1, last1, b, first2, last2, |x, y| x == y);
}

#[allow(clippy::too_many_arguments)]
pub fn equal2_by<A, B, P>(
    a: &A,
    first1: usize,
    last1: usize,
    b: &B,
    first2: usize,
    last2: usize,
    pred: P,
) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    debug_check_range(a, first1, last1);
    debug_check_range(b, first2, last2);
    if last1 - first1 != last2 - first2 {
        return false;
    }
    return equal_by(a, first1, last1, b, first2, pred);
}

/// True if the two ranges hold the same elements with the same
/// multiplicities, in any order.
pub fn is_permutation<A, B>(
    a: &A,
    first1: usize,
    last1: usize,
    b: &B,
    first2: usize,
    last2: usize,
) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    return is_permutation_by(a, first1, last1, b, first2, last2, |x, y| x == y);
}

/// [`is_permutation`] under an equivalence relation `pred`.
#[allow(clippy::too_many_arguments)]
pub fn is_permutation_by<A, B, P>(
    a: &A,
    first1: usize,
    last1: usize,
    b: &B,
    first2: usize,
    last2: usize,
    mut pred: P,
) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    P: FnMut(&A::Item, &A::Item) -> bool,
{
    if last1 - first1 != last2 - first2 {
        return false;
    }
    let Pair { first: first1, second: first2 } =
        mismatch2_by(a, first1, last1, b, first2, last2, &mut pred);

    for pos in first1..last1 {
        let target = a.at(pos);
        // Each distinct value is counted once, at its first occurrence.
        if find_if(a, first1, pos, |x| pred(x, target)) != pos {
            continue;
        }
        let in_b = count_if(b, first2, last2, |x| pred(x, target));
        if in_b == 0 {
            return false;
        }
        if count_if(a, pos, last1, |x| pred(x, target)) != in_b {
            return false;
        }
    }
    return true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_absolute_positions() {
        let v = [5, 3, 7, 3, 9];
        assert_eq!(find(&v, 0, 5, &3), 1);
        assert_eq!(find(&v, 2, 5, &3), 3);
        assert_eq!(find(&v, 2, 5, &5), 5);
        assert_eq!(find(&v, 4, 4, &9), 4);
    }

    #[test]
    fn find_if_and_find_if_not() {
        let v = [2, 4, 5, 6];
        assert_eq!(find_if(&v, 0, 4, |x| x % 2 == 1), 2);
        assert_eq!(find_if_not(&v, 0, 4, |x| x % 2 == 0), 2);
        assert_eq!(find_if_not(&v, 3, 4, |x| x % 2 == 0), 4);
    }

    #[test]
    fn quantifiers_on_empty_range() {
        let v: [i32; 0] = [];
        assert!(all_of(&v, 0, 0, |_| false));
        assert!(none_of(&v, 0, 0, |_| true));
        assert!(!any_of(&v, 0, 0, |_| true));
    }

    #[test]
    fn quantifiers() {
        let v = [1, 3, 5, 6];
        assert!(all_of(&v, 0, 3, |x| x % 2 == 1));
        assert!(!all_of(&v, 0, 4, |x| x % 2 == 1));
        assert!(any_of(&v, 0, 4, |x| *x == 6));
        assert!(none_of(&v, 0, 3, |x| *x == 6));
    }

    #[test]
    fn adjacent_find_cases() {
        let v = [1, 2, 3, 3, 4, 4];
        assert_eq!(adjacent_find(&v, 0, 6), 2);
        assert_eq!(adjacent_find(&v, 3, 6), 4);
        assert_eq!(adjacent_find(&v, 0, 3), 3);
        assert_eq!(adjacent_find(&v, 2, 3), 3);
        assert_eq!(adjacent_find(&v, 1, 1), 1);
        assert_eq!(adjacent_find_by(&v, 0, 6, |a, b| a > b), 6);
        assert_eq!(adjacent_find_by(&v, 0, 6, |a, b| b - a == 1), 0);
    }

    #[test]
    fn bounds_on_sorted_subrange() {
        let v = [9, 1, 2, 2, 2, 4, 0];
        assert_eq!(lower_bound(&v, 1, 6, &2), 2);
        assert_eq!(upper_bound(&v, 1, 6, &2), 5);
        assert_eq!(lower_bound(&v, 1, 6, &3), 5);
        assert_eq!(upper_bound(&v, 1, 6, &3), 5);
        assert_eq!(lower_bound(&v, 1, 6, &0), 1);
        assert_eq!(upper_bound(&v, 1, 6, &7), 6);
        assert_eq!(equal_range(&v, 1, 6, &2), Pair::new(2, 5));
        assert!(binary_search(&v, 1, 6, &4));
        assert!(!binary_search(&v, 1, 6, &3));
    }

    #[test]
    fn bounds_with_reverse_ordering() {
        let v = [9, 7, 7, 3];
        let rev = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(lower_bound_by(&v, 0, 4, &7, rev), 1);
        assert_eq!(upper_bound_by(&v, 0, 4, &7, rev), 3);
        assert!(binary_search_by(&v, 0, 4, &3, rev));
    }

    #[test]
    fn mismatch_stops_at_first_difference() {
        let a = [1, 2, 3, 4];
        let b = [0, 1, 2, 9, 4];
        assert_eq!(mismatch(&a, 0, 4, &b, 1), Pair::new(2, 3));
        assert_eq!(mismatch(&a, 0, 2, &b, 1), Pair::new(2, 3));
        assert_eq!(mismatch2(&a, 0, 4, &b, 1, 3), Pair::new(2, 3));
        assert_eq!(mismatch2(&a, 0, 4, &b, 1, 2), Pair::new(1, 2));
    }

    #[test]
    fn mismatch_across_element_types() {
        let words = ["a", "bb", "ccc"];
        let lens = [1usize, 2, 4];
        let hit = mismatch_by(&words, 0, 3, &lens, 0, |w, n| w.len() == *n);
        assert_eq!(hit, Pair::new(2, 2));
    }

    #[test]
    fn equal_forms() {
        let a = [1, 2, 3];
        let b = [1, 2, 3, 4];
        assert!(equal(&a, 0, 3, &b, 0));
        assert!(!equal2(&a, 0, 3, &b, 0, 4));
        assert!(equal2(&a, 0, 3, &b, 0, 3));
        assert!(equal_by(&a, 0, 3, &b, 1, |x, y| x + 1 == *y));
        assert!(equal(&a, 1, 1, &b, 3));
    }

    #[test]
    fn permutations() {
        let a = [1, 2, 2, 3];
        assert!(is_permutation(&a, 0, 4, &[2, 3, 1, 2], 0, 4));
        assert!(!is_permutation(&a, 0, 4, &[2, 3, 1, 1], 0, 4));
        assert!(!is_permutation(&a, 0, 4, &[1, 2, 3], 0, 3));
        assert!(is_permutation(&a, 0, 0, &[7], 1, 1));
        assert!(is_permutation_by(&a, 0, 4, &[11, 22, 32, 13], 0, 4, |x, y| x % 10 == y % 10));
    }
}
