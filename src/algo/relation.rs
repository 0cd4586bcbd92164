/*!
Relation-theoretic properties of the edge set.

The edge set of a graph is read as a binary relation `R` on its vertices with `u R v` iff the
edge `(u, v)` exists.
*/

use super::*;

/// All relation properties of a graph, computed at once by [`RelationProperties::relation_summary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelationSummary {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub anti_symmetric: bool,
}

impl RelationSummary {
    /// Returns *true* if the relation is reflexive, symmetric and transitive
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }
}

/// Predicates over the relation induced by the edges of a graph.
pub trait RelationProperties: AdjacencyList + AdjacencyTest {
    /// Returns *true* if every vertex has a self-loop.
    /// A graph without vertices is reflexive.
    ///
    /// # Examples
    /// ```
    /// use relgraph::{prelude::*, algo::*};
    ///
    /// let g = RelationGraph::new([1, 2], [(1, 1), (2, 2), (1, 2)]);
    /// assert!(g.is_reflexive());
    /// ```
    fn is_reflexive(&self) -> bool {
        self.vertices().all(|u| self.has_self_loop(u))
    }

    /// Returns *true* if for every edge `(u, v)` the edge `(v, u)` exists as well.
    fn is_symmetric(&self) -> bool {
        self.edges().all(|Edge(u, v)| self.has_edge(v, u))
    }

    /// Returns *true* if for every edge `(u, v)` and every vertex `w`,
    /// the existence of `(v, w)` implies the existence of `(u, w)`.
    ///
    /// # Examples
    /// ```
    /// use relgraph::{prelude::*, algo::*};
    ///
    /// let g = RelationGraph::new([1, 2, 3], [(1, 2), (2, 3)]);
    /// assert!(!g.is_transitive());
    ///
    /// let g = RelationGraph::new([1, 2, 3], [(1, 2), (2, 3), (1, 3)]);
    /// assert!(g.is_transitive());
    /// ```
    fn is_transitive(&self) -> bool {
        self.edges().all(|Edge(u, v)| {
            self.vertices()
                .all(|w| !self.has_edge(v, w) || self.has_edge(u, w))
        })
    }

    /// Returns *true* if no two distinct vertices `u != v` have both edges `(u, v)` and `(v, u)`.
    /// Self-loops never violate antisymmetry.
    fn is_anti_symmetric(&self) -> bool {
        self.edges()
            .all(|Edge(u, v)| u == v || !self.has_edge(v, u))
    }

    /// Returns *true* if the relation is reflexive, symmetric and transitive.
    fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// Computes all properties at once
    fn relation_summary(&self) -> RelationSummary {
        RelationSummary {
            reflexive: self.is_reflexive(),
            symmetric: self.is_symmetric(),
            transitive: self.is_transitive(),
            anti_symmetric: self.is_anti_symmetric(),
        }
    }
}

impl<G> RelationProperties for G where G: AdjacencyList + AdjacencyTest {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn reflexive() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 1), (2, 2), (3, 3), (1, 3)]);
        assert!(graph.is_reflexive());

        let graph = RelationGraph::new([1u32, 2, 3], [(1, 1), (2, 2), (1, 3)]);
        assert!(!graph.is_reflexive());

        let graph = RelationGraph::<u32>::new([], Vec::<Edge<u32>>::new());
        assert!(graph.is_reflexive());
    }

    #[test]
    fn symmetric() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 2), (2, 1), (3, 3)]);
        assert!(graph.is_symmetric());

        let graph = RelationGraph::new([1u32, 2, 3], [(1, 2), (2, 1), (2, 3)]);
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn transitive() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 2), (2, 3), (1, 3)]);
        assert!(graph.is_transitive());

        // (1,2),(2,1) requires (1,1) and (2,2)
        let graph = RelationGraph::new([1u32, 2], [(1, 2), (2, 1)]);
        assert!(!graph.is_transitive());

        let graph = RelationGraph::new([1u32, 2], [(1, 2), (2, 1), (1, 1), (2, 2)]);
        assert!(graph.is_transitive());
    }

    #[test]
    fn anti_symmetric() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 1), (1, 2), (2, 3)]);
        assert!(graph.is_anti_symmetric());

        let graph = RelationGraph::new([1u32, 2], [(1, 2), (2, 1)]);
        assert!(!graph.is_anti_symmetric());
    }

    #[test]
    fn equivalence() {
        let graph = RelationGraph::new(
            [1u32, 2, 3],
            [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)],
        );
        assert!(graph.is_equivalence());

        let summary = graph.relation_summary();
        assert!(summary.is_equivalence());
        assert!(!summary.anti_symmetric);
    }

    #[test]
    fn transitivity_matches_edge_pairs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [3u32, 5, 8] {
            for m_ub in [n as usize, (n * n) as usize, 2 * (n * n) as usize] {
                for _ in 0..20 {
                    let graph = random_graph(rng, n, m_ub);
                    let edges = graph.edges().collect_vec();

                    let by_pairs = edges.iter().all(|Edge(a, b)| {
                        edges
                            .iter()
                            .filter(|Edge(c, _)| c == b)
                            .all(|Edge(_, d)| graph.has_edge(a, d))
                    });

                    assert_eq!(graph.is_transitive(), by_pairs);
                }
            }
        }
    }

    #[test]
    fn equivalence_is_conjunction() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [1u32, 4, 10] {
            for _ in 0..20 {
                let graph = random_graph(rng, n, (n * n) as usize);
                assert_eq!(
                    graph.is_equivalence(),
                    graph.is_reflexive() && graph.is_symmetric() && graph.is_transitive()
                );
            }

            for k in 1..=n {
                let (graph, _) = random_equivalence(rng, n, k);
                assert!(graph.is_equivalence());
                assert_eq!(graph.is_anti_symmetric(), graph.vertices().all(|u| {
                    graph.successors_of(u).count() == 1
                }));
            }
        }
    }
}
