use std::collections::BTreeSet;

use super::*;

/// Equivalence classes of graphs whose relation is an equivalence.
///
/// If the relation is not an equivalence, every query returns an empty result.
pub trait EquivalenceClasses: RelationProperties {
    /// Returns the equivalence class of `u`, i.e. all vertices `v` with edges `(u, v)` and `(v, u)`.
    /// Returns an empty set if the relation is not an equivalence or `u` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use relgraph::{prelude::*, algo::*};
    ///
    /// let g = RelationGraph::new([1, 2, 3], [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)]);
    /// assert_eq!(g.equivalence_class_of(&2).into_iter().collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(g.equivalence_class_of(&3).len(), 1);
    /// ```
    fn equivalence_class_of(&self, u: &Self::V) -> BTreeSet<Self::V> {
        if !self.has_vertex(u) || !self.is_equivalence() {
            return BTreeSet::new();
        }

        self.class_members_of(u).cloned().collect()
    }

    /// Returns all equivalence classes ordered by their minimum.
    /// Returns an empty vector if the relation is not an equivalence.
    fn equivalence_classes(&self) -> Vec<BTreeSet<Self::V>> {
        if !self.is_equivalence() {
            return Vec::new();
        }

        self.class_representatives()
            .map(|u| self.class_members_of(u).cloned().collect())
            .collect()
    }

    /// Returns the minimum vertex of every equivalence class in ascending order.
    /// Requires the relation to be an equivalence; this is not checked.
    fn class_representatives(&self) -> impl Iterator<Item = &Self::V> + '_ {
        // by reflexivity `u` is a member of its own class
        self.vertices()
            .filter(move |&u| self.class_members_of(u).next() == Some(u))
    }

    /// Returns all vertices `v` with edges `(u, v)` and `(v, u)` in ascending order.
    /// For an equivalence relation, this is the class of `u`.
    fn class_members_of<'a>(&'a self, u: &'a Self::V) -> impl Iterator<Item = &'a Self::V> + 'a {
        self.successors_of(u)
            .filter(move |&v| self.has_vertex(v) && self.has_edge(v, u))
    }
}

impl<G> EquivalenceClasses for G where G: RelationProperties {}
