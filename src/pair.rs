// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Two values returned together.

/// An ordered pair, used wherever an algorithm reports two positions at once
/// (e.g. `mismatch`, `partition_copy`, `equal_range`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<T1, T2> {
    pub first: T1,
    pub second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    pub fn new(first: T1, second: T2) -> Pair<T1, T2> {
        return Pair { first, second };
    }
}

/// Shorthand for [`Pair::new`].
#[inline]
pub fn make_pair<T1, T2>(first: T1, second: T2) -> Pair<T1, T2> {
    return Pair::new(first, second);
}

impl<T1, T2> From<(T1, T2)> for Pair<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        return Pair { first, second };
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    fn from(pair: Pair<T1, T2>) -> Self {
        return (pair.first, pair.second);
    }
}
