// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Subsequence search and run search.
//!
//! Both searches are brute force: `search` restarts a lockstep comparison at
//! every candidate start, and `search_n` scans once, restarting its run
//! counter after each element that breaks a run.

use crate::sequence::{Sequence, debug_check_range};

/// First position at which `[s_first, s_last)` of `pattern` occurs inside
/// `[first, last)` of `seq`, or `last` if it never does. An empty pattern
/// matches at `first`.
pub fn search<A, B>(
    seq: &A,
    first: usize,
    last: usize,
    pattern: &B,
    s_first: usize,
    s_last: usize,
) -> usize
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    return search_by(seq, first, last, pattern, s_first, s_last, |x, y| x == y);
}

/// [`search`] with a caller-supplied element match.
#[allow(clippy::too_many_arguments)]
pub fn search_by<A, B, P>(
    seq: &A,
    mut first: usize,
    last: usize,
    pattern: &B,
    s_first: usize,
    s_last: usize,
    mut pred: P,
) -> usize
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    P: FnMut(&A::Item, &B::Item) -> bool,
{
    debug_check_range(seq, first, last);
    debug_check_range(pattern, s_first, s_last);
    loop {
        let mut it = first;
        let mut s_it = s_first;
        loop {
            if s_it == s_last {
                return first;
            }
            if it == last {
                return last;
            }
            if !pred(seq.at(it), pattern.at(s_it)) {
                break;
            }
            it += 1;
            s_it += 1;
        }
        first += 1;
    }
}

/// Start of the first run of `count` consecutive elements equal to `value`,
/// or `last` if no such run exists. `count == 0` matches at `first`.
pub fn search_n<S>(seq: &S, first: usize, last: usize, count: usize, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    return search_n_by(seq, first, last, count, value, |x, v| x == v);
}

/// [`search_n`] where an element belongs to the run if `pred(element, value)`.
pub fn search_n_by<S, V, P>(
    seq: &S,
    mut first: usize,
    last: usize,
    count: usize,
    value: &V,
    mut pred: P,
) -> usize
where
    S: Sequence + ?Sized,
    V: ?Sized,
    P: FnMut(&S::Item, &V) -> bool,
{
    debug_check_range(seq, first, last);
    if count == 0 {
        return first;
    }

    while first != last {
        if !pred(seq.at(first), value) {
            first += 1;
            continue;
        }

        let candidate = first;
        let mut run = 1;
        loop {
            if run >= count {
                return candidate;
            }
            first += 1;
            if first == last {
                return last;
            }
            if !pred(seq.at(first), value) {
                break;
            }
            run += 1;
        }
        // seq[first] broke the run, so no run can start there either.
        first += 1;
    }
    return last;
}
