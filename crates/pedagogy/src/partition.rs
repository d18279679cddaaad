// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Three partition schemes.
//!
//! Each moves the elements of `v[first..last]` satisfying `pred` in front of
//! those that do not, and returns the partition point.

/// A partitioning scheme for elements of type `T`.
///
/// Swap-only schemes implement this for every `T`; schemes that copy
/// elements out carry their own bound on the impl.
pub trait Partitioner<T> {
    /// Short name for test and benchmark output.
    const NAME: &'static str;

    /// Whether both groups keep their original relative order.
    const STABLE: bool;

    fn partition<P>(v: &mut [T], first: usize, last: usize, pred: P) -> usize
    where
        P: FnMut(&T) -> bool;
}

/// Forward scan keeping a boundary behind the read cursor; every true
/// element is swapped down to the boundary.
pub struct Lomuto;

impl<T> Partitioner<T> for Lomuto {
    const NAME: &'static str = "lomuto";
    const STABLE: bool = false;

    fn partition<P>(v: &mut [T], first: usize, last: usize, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut boundary = first;
        for read in first..last {
            if pred(&v[read]) {
                v.swap(boundary, read);
                boundary += 1;
            }
        }
        return boundary;
    }
}

/// Two cursors closing in from both ends, swapping misplaced pairs. At most
/// `n / 2` swaps.
pub struct Hoare;

impl<T> Partitioner<T> for Hoare {
    const NAME: &'static str = "hoare";
    const STABLE: bool = false;

    fn partition<P>(v: &mut [T], first: usize, last: usize, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut lo = first;
        let mut hi = last;
        loop {
            while lo != hi && pred(&v[lo]) {
                lo += 1;
            }
            if lo == hi {
                return lo;
            }
            hi -= 1;
            while lo != hi && !pred(&v[hi]) {
                hi -= 1;
            }
            if lo == hi {
                return lo;
            }
            v.swap(lo, hi);
            lo += 1;
        }
    }
}

/// Clone both groups out, then write them back in order. Stable, O(n)
/// extra memory.
pub struct Buffered;

impl<T: Clone> Partitioner<T> for Buffered {
    const NAME: &'static str = "buffered";
    const STABLE: bool = true;

    fn partition<P>(v: &mut [T], first: usize, last: usize, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let (trues, falses): (Vec<T>, Vec<T>) =
            v[first..last].iter().cloned().partition(|x| pred(x));
        let point = first + trues.len();
        for (slot, item) in v[first..last].iter_mut().zip(trues.into_iter().chain(falses)) {
            *slot = item;
        }
        return point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<P: Partitioner<i32>>() {
        let input = [5, 2, 8, 1, 9, 4, 7, 6, 3];
        let mut v = input;
        let point = P::partition(&mut v, 1, 8, |x| x % 2 == 0);
        assert_eq!(point, 5, "{}", P::NAME);
        assert!(v[1..point].iter().all(|x| x % 2 == 0), "{}", P::NAME);
        assert!(v[point..8].iter().all(|x| x % 2 == 1), "{}", P::NAME);
        assert_eq!((v[0], v[8]), (5, 3), "{}", P::NAME);
        if P::STABLE {
            assert_eq!(v, [5, 2, 8, 4, 6, 1, 9, 7, 3]);
        }
    }

    #[test]
    fn lomuto() {
        check::<Lomuto>();
    }

    #[test]
    fn hoare() {
        check::<Hoare>();
    }

    #[test]
    fn buffered() {
        check::<Buffered>();
    }

    #[derive(Debug, PartialEq)]
    struct Ticket(u32);

    #[test]
    fn swap_only_schemes_take_unclonable_elements() {
        let mut v: Vec<Ticket> = [4, 1, 6, 3].into_iter().map(Ticket).collect();
        assert_eq!(Lomuto::partition(&mut v, 0, 4, |t| t.0 % 2 == 0), 2);
        assert!(v[..2].iter().all(|t| t.0 % 2 == 0));

        let mut v: Vec<Ticket> = [4, 1, 6, 3].into_iter().map(Ticket).collect();
        assert_eq!(Hoare::partition(&mut v, 0, 4, |t| t.0 % 2 == 1), 2);
        assert!(v[..2].iter().all(|t| t.0 % 2 == 1));
        assert!(v[2..].iter().all(|t| t.0 % 2 == 0));
    }

    #[test]
    fn empty_range() {
        let mut v: [i32; 0] = [];
        assert_eq!(Lomuto::partition(&mut v, 0, 0, |_| true), 0);
        assert_eq!(Hoare::partition(&mut v, 0, 0, |_| true), 0);
        assert_eq!(Buffered::partition(&mut v, 0, 0, |_| true), 0);
    }
}
