// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Three classic left rotations.
//!
//! Each rotates `v[first..last]` so that `v[middle]` becomes the element at
//! `first`, returning `first + (last - middle)`: the new position of the
//! element that started at `first`.

/// A left-rotation scheme.
pub trait Rotation {
    /// Short name for test and benchmark output.
    const NAME: &'static str;

    fn rotate<T>(v: &mut [T], first: usize, middle: usize, last: usize) -> usize;
}

/// Swap `[first, middle)` forward against `[middle, last)` and recurse on
/// the unfinished remainder.
///
/// Recursion depth grows with the number of rounds, which is why the main
/// crate uses the iterative form.
pub struct SwapRecurse;

impl Rotation for SwapRecurse {
    const NAME: &'static str = "swap-recurse";

    fn rotate<T>(v: &mut [T], first: usize, middle: usize, last: usize) -> usize {
        if first == middle {
            return last;
        }
        if middle == last {
            return first;
        }
        let mut write = first;
        let mut next_read = first;
        for read in middle..last {
            if write == next_read {
                next_read = read;
            }
            v.swap(write, read);
            write += 1;
        }
        SwapRecurse::rotate(v, write, next_read, last);
        return write;
    }
}

/// `reverse(A) reverse(B)` then reverse everything: `(A^r B^r)^r = B A`.
///
/// Exactly `n` swaps when both blocks are non-empty, rounded down per block.
pub struct ThreeReversal;

impl Rotation for ThreeReversal {
    const NAME: &'static str = "three-reversal";

    fn rotate<T>(v: &mut [T], first: usize, middle: usize, last: usize) -> usize {
        v[first..middle].reverse();
        v[middle..last].reverse();
        v[first..last].reverse();
        return first + (last - middle);
    }
}

/// Cycle-leader rotation: the permutation `i -> i - k (mod n)` splits into
/// `gcd(n, k)` cycles, and each cycle is walked once with a chain of swaps
/// that carries the leader's element to the end of its cycle.
pub struct Juggling;

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    return a;
}

impl Rotation for Juggling {
    const NAME: &'static str = "juggling";

    fn rotate<T>(v: &mut [T], first: usize, middle: usize, last: usize) -> usize {
        let n = last - first;
        let k = middle - first;
        if k == 0 {
            return last;
        }
        if k == n {
            return first;
        }
        for start in 0..gcd(n, k) {
            let mut hole = start;
            loop {
                let mut next = hole + k;
                if next >= n {
                    next -= n;
                }
                if next == start {
                    break;
                }
                v.swap(first + hole, first + next);
                hole = next;
            }
        }
        return first + (n - k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<R: Rotation>() {
        for len in 0..10 {
            for mid in 0..=len {
                let mut v: Vec<usize> = (0..len).collect();
                let mut expected = v.clone();
                expected.rotate_left(mid);
                let result = R::rotate(&mut v, 0, mid, len);
                assert_eq!(v, expected, "{} len={} mid={}", R::NAME, len, mid);
                assert_eq!(result, len - mid, "{} len={} mid={}", R::NAME, len, mid);
            }
        }
    }

    #[test]
    fn swap_recurse() {
        check::<SwapRecurse>();
    }

    #[test]
    fn three_reversal() {
        check::<ThreeReversal>();
    }

    #[test]
    fn juggling() {
        check::<Juggling>();
    }

    #[test]
    fn gcd_values() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(5, 5), 5);
    }

    #[test]
    fn subrange_rotation_leaves_outside_alone() {
        let mut v = [9, 1, 2, 3, 4, 9];
        assert_eq!(Juggling::rotate(&mut v, 1, 2, 5), 4);
        assert_eq!(v, [9, 2, 3, 4, 1, 9]);
    }
}
