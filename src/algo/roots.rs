use std::collections::BTreeSet;

use super::*;

/// Selection of the vertices every traversal starts from.
pub trait Roots: EquivalenceClasses {
    /// Returns all roots in ascending order:
    /// - every vertex without incoming edges, and
    /// - if the relation is an equivalence, the minimum vertex of every equivalence class.
    ///
    /// Under an equivalence every vertex has a self-loop and thus a positive in-degree, so the
    /// second rule is what makes such graphs traversable.
    ///
    /// # Examples
    /// ```
    /// use relgraph::{prelude::*, algo::*};
    ///
    /// let g = RelationGraph::new([1, 2, 3], [(1, 2), (2, 3)]);
    /// assert_eq!(g.roots(), vec![1]);
    ///
    /// let g = RelationGraph::new([1, 2, 3], [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)]);
    /// assert_eq!(g.roots(), vec![1, 3]);
    /// ```
    fn roots(&self) -> Vec<Self::V> {
        self.roots_iter().cloned().collect()
    }

    /// Returns references to all roots in ascending order; see [`Roots::roots`]
    fn roots_iter(&self) -> impl Iterator<Item = &Self::V> + '_ {
        let mut roots: BTreeSet<&Self::V> = self
            .vertices()
            .filter(|u| self.in_degree_of(u) == 0)
            .collect();

        if self.is_equivalence() {
            roots.extend(self.class_representatives());
        }

        roots.into_iter()
    }
}

impl<G> Roots for G where G: EquivalenceClasses {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn in_degree_zero() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 2), (2, 3)]);
        assert_eq!(graph.roots(), vec![1]);

        let graph = RelationGraph::new([1u32, 2, 3, 4], [(1, 2), (3, 2)]);
        assert_eq!(graph.roots(), vec![1, 3, 4]);
    }

    #[test]
    fn no_roots_on_cycle() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 2), (2, 3), (3, 1)]);
        assert!(graph.roots().is_empty());
    }

    #[test]
    fn equivalence_roots() {
        let graph = RelationGraph::new(
            [1u32, 2, 3],
            [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)],
        );
        assert_eq!(graph.roots(), vec![1, 3]);
    }

    #[test]
    fn numeric_order_of_labels() {
        let graph = RelationGraph::from_text(["10", "2", "33", "4"], [("33", "4")]).unwrap();
        assert_eq!(
            graph.roots().iter().map(Label::as_str).collect_vec(),
            vec!["2", "10", "33"]
        );
    }

    #[test]
    fn roots_of_random_equivalences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        for n in [1u32, 5, 20] {
            for k in [1, 3, n] {
                let (graph, class) = random_equivalence(rng, n, k);

                let expected = class
                    .iter()
                    .enumerate()
                    .into_group_map_by(|(_, c)| **c)
                    .into_values()
                    .map(|members| members[0].0 as u32)
                    .sorted()
                    .collect_vec();

                assert_eq!(graph.roots(), expected);
                assert_eq!(graph.roots(), graph.roots());
            }
        }
    }
}
