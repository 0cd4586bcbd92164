/*!
# Generalized Sets

This module provides an abstraction over `Set` data structures, allowing traversals
to choose how visited vertices are recorded.

Examples:
- Hashed sets -> `HashSet` / `FxHashSet`
- Ordered sets -> `BTreeSet`
*/

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// Minimalist trait for the visited-set of a traversal.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was not present before.
    fn insert(&mut self, value: T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }
}

impl<T> Set<T> for BTreeSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    fn exercise<S: Set<u32> + Default>() {
        let mut set = S::default();
        assert!(!set.contains(&3));

        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(1));

        assert!(set.contains(&1));
        assert!(set.contains(&3));
        assert!(!set.contains(&2));
    }

    #[test]
    fn hash_sets() {
        exercise::<HashSet<u32>>();
        exercise::<FxHashSet<u32>>();
    }

    #[test]
    fn btree_set() {
        exercise::<BTreeSet<u32>>();
    }
}
