/*!
# Utilities

Provides
- the [`Queue`] and [`Stack`] containers used as traversal frontiers,
- an abstraction over [`Set`] for the visited-state of traversals,
- [`FromCapacity`] to create such sets generically.

Apart from `Queue` and `Stack`, you probably do not need to interact with this module directly.
*/

use std::{
    collections::{BTreeSet, HashSet},
    hash::RandomState,
};

use fxhash::{FxBuildHasher, FxHashSet};

pub mod containers;
pub mod set;

pub use containers::{Queue, Stack};
pub use set::Set;

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// This should mainly be used in conjunction with [`Set`] datastructures.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self;
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<T> FromCapacity for BTreeSet<T> {
    fn from_capacity(_capacity: usize) -> Self {
        // BTreeSet does not preallocate
        Self::new()
    }
}
