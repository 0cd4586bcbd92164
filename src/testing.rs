//! Random graph generators shared by the unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Creates a graph on vertices `0..n` with at most `m_ub` random edges (self-loops included)
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> RelationGraph<u32> {
    let edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec();

    RelationGraph::new(0..n, edges)
}

/// Assigns each vertex of `0..n` to one of `k` random classes and relates all
/// vertices of the same class, producing an equivalence relation.
/// Returns the graph and the class of each vertex.
pub(crate) fn random_equivalence<R: Rng>(
    rng: &mut R,
    n: u32,
    k: u32,
) -> (RelationGraph<u32>, Vec<u32>) {
    let class = (0..n).map(|_| rng.random_range(0..k)).collect_vec();

    let edges = (0..n)
        .cartesian_product(0..n)
        .filter(|&(u, v)| class[u as usize] == class[v as usize])
        .collect_vec();

    (RelationGraph::new(0..n, edges), class)
}

/// Returns the reflexive, symmetric and transitive closure of `edges` on `0..n`
pub(crate) fn equivalence_closure(n: u32, edges: &[(u32, u32)]) -> RelationGraph<u32> {
    let mut class = (0..n).collect_vec();
    for &(u, v) in edges {
        let (cu, cv) = (class[u as usize], class[v as usize]);
        if cu != cv {
            class.iter_mut().filter(|c| **c == cv).for_each(|c| *c = cu);
        }
    }

    let closure = (0..n)
        .cartesian_product(0..n)
        .filter(|&(u, v)| class[u as usize] == class[v as usize])
        .collect_vec();

    RelationGraph::new(0..n, closure)
}
