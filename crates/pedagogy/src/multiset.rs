// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Hash-based multiset comparison.
//!
//! The comparison-only `is_permutation` in the main crate is O(n²); counting
//! into a hash map is O(n) when elements are hashable. The conformance suite
//! uses this as the reference for "same elements, any order".

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Count occurrences of each distinct element.
pub fn counts<T: Hash + Eq>(items: &[T]) -> FxHashMap<&T, usize> {
    let mut map = FxHashMap::default();
    for item in items {
        *map.entry(item).or_insert(0) += 1;
    }
    return map;
}

/// True if `a` and `b` hold the same elements with the same multiplicities.
pub fn is_permutation_hashed<T: Hash + Eq>(a: &[T], b: &[T]) -> bool {
    return a.len() == b.len() && counts(a) == counts(b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let map = counts(&["a", "b", "a"]);
        assert_eq!(map[&"a"], 2);
        assert_eq!(map[&"b"], 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn permutation_checks() {
        assert!(is_permutation_hashed(&[1, 2, 2], &[2, 1, 2]));
        assert!(!is_permutation_hashed(&[1, 2, 2], &[2, 1, 1]));
        assert!(!is_permutation_hashed(&[1, 2], &[1, 2, 2]));
        assert!(is_permutation_hashed::<u8>(&[], &[]));
    }
}
