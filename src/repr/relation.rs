/*!
# Relation Graph

[`RelationGraph`] stores a fixed vertex set and a fixed set of directed edges.
It is built once and read-only afterwards.

## Design
- Vertices are kept in a `BTreeSet` so that they enumerate in ascending order.
- Outgoing neighborhoods are kept in `BTreeSet`s so that successors enumerate in ascending order.
- In-degrees are counted once on construction.
*/

use std::collections::{BTreeMap, BTreeSet};

use fxhash::FxHashMap;
use tracing::debug;

use crate::{error::*, label::*};

use super::*;

/// A directed graph whose edge set is read as a binary relation on its vertices.
///
/// Every edge endpoint is expected to be a vertex. [`RelationGraph::new`] does not enforce
/// this, [`RelationGraph::try_new`] and [`GraphBuilder`] do.
#[derive(Clone, Debug)]
pub struct RelationGraph<V> {
    vertices: BTreeSet<V>,
    out_nbs: BTreeMap<V, BTreeSet<V>>,
    in_degrees: FxHashMap<V, NumVertices>,
    num_edges: NumEdges,
}

impl<V: Vertex> RelationGraph<V> {
    /// Creates a graph from a collection of vertices and a collection of edges.
    /// Duplicates in either collection are ignored.
    ///
    /// # Examples
    /// ```
    /// use relgraph::prelude::*;
    ///
    /// let g = RelationGraph::new([1, 2, 3], [(1, 2), (2, 3), (1, 2)]);
    /// assert_eq!(g.number_of_vertices(), 3);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn new<I, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        let vertices: BTreeSet<V> = vertices.into_iter().collect();
        let mut out_nbs: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        let mut in_degrees: FxHashMap<V, NumVertices> = FxHashMap::default();
        let mut num_edges = 0;

        for Edge(u, v) in edges.into_iter().map(Into::<Edge<V>>::into) {
            if out_nbs.entry(u).or_default().insert(v.clone()) {
                *in_degrees.entry(v).or_default() += 1;
                num_edges += 1;
            }
        }

        debug!(
            vertices = vertices.len(),
            edges = num_edges,
            "constructed relation graph"
        );

        Self {
            vertices,
            out_nbs,
            in_degrees,
            num_edges,
        }
    }

    /// Creates a graph like [`RelationGraph::new`] but rejects edges referencing unknown vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingEndpoint`] for the smallest offending edge.
    pub fn try_new<I, E>(vertices: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        let graph = Self::new(vertices, edges);
        graph.check_endpoints()?;
        Ok(graph)
    }

    /// Returns an iterator over all edges with at least one endpoint that is not a vertex
    pub fn dangling_edges(&self) -> impl Iterator<Item = Edge<&V>> + '_ {
        self.edges()
            .filter(move |Edge(u, v)| !self.has_vertex(u) || !self.has_vertex(v))
    }

    pub(crate) fn check_endpoints(&self) -> Result<(), GraphError> {
        match self.dangling_edges().next() {
            None => Ok(()),
            Some(Edge(u, v)) => {
                let endpoint = if self.has_vertex(u) { v } else { u };
                debug!(source = ?u, destination = ?v, "edge references unknown vertex");
                Err(GraphError::DanglingEndpoint {
                    edge: format!("{:?}", Edge(u, v)),
                    endpoint: format!("{endpoint:?}"),
                })
            }
        }
    }
}

impl RelationGraph<Label> {
    /// Parses vertices and edges given as text and creates a checked graph.
    ///
    /// # Errors
    /// Fails if a text is not a base-10 integer or an edge references an unknown vertex.
    ///
    /// # Examples
    /// ```
    /// use relgraph::prelude::*;
    ///
    /// let g = RelationGraph::from_text(["1", "2", "10"], [("10", "2")]).unwrap();
    /// assert!(g.has_edge(&Label::new(10), &Label::new(2)));
    ///
    /// assert!(RelationGraph::from_text(["1"], [("1", "2")]).is_err());
    /// assert!(RelationGraph::from_text(["one"], [("one", "one")]).is_err());
    /// ```
    pub fn from_text<I, E, S, T>(vertices: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        Self::try_new(labels(vertices)?, label_edges(edges)?)
    }
}

impl<V: Vertex> GraphVertexOrder for RelationGraph<V> {
    type V = V;

    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    fn has_vertex(&self, u: &V) -> bool {
        self.vertices.contains(u)
    }
}

impl<V: Vertex> GraphEdgeOrder for RelationGraph<V> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V: Vertex> AdjacencyList for RelationGraph<V> {
    fn successors_of<'a>(&'a self, u: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.out_nbs.get(u).into_iter().flatten()
    }

    fn out_degree_of(&self, u: &V) -> NumVertices {
        self.out_nbs.get(u).map_or(0, BTreeSet::len)
    }

    fn in_degree_of(&self, u: &V) -> NumVertices {
        self.in_degrees.get(u).copied().unwrap_or(0)
    }

    // also covers sources that are not vertices
    fn edges(&self) -> impl Iterator<Item = Edge<&V>> + '_ {
        self.out_nbs
            .iter()
            .flat_map(|(u, vs)| vs.iter().map(move |v| Edge(u, v)))
    }
}

impl<V: Vertex> AdjacencyTest for RelationGraph<V> {
    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.out_nbs.get(u).is_some_and(|vs| vs.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn construction() {
        let graph = RelationGraph::new([3u32, 1, 2, 1], [(1, 2), (2, 3), (3, 3), (1, 2)]);

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.vertices().copied().collect_vec(), vec![1, 2, 3]);
        assert_eq!(
            graph.edges().map(|Edge(u, v)| (*u, *v)).collect_vec(),
            vec![(1, 2), (2, 3), (3, 3)]
        );

        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert!(graph.has_self_loop(&3));
        assert!(!graph.has_bidirected_edge(&1, &2));
    }

    #[test]
    fn degrees() {
        let graph = RelationGraph::new([1u32, 2, 3], [(1, 2), (1, 3), (3, 3), (2, 3)]);

        assert_eq!(graph.out_degree_of(&1), 2);
        assert_eq!(graph.out_degree_of(&2), 1);
        assert_eq!(graph.in_degree_of(&1), 0);
        assert_eq!(graph.in_degree_of(&3), 3);
        assert_eq!(graph.in_degree_of(&42), 0);
        assert_eq!(graph.successors_of(&42).count(), 0);
    }

    #[test]
    fn successors_are_numeric_order() {
        let graph =
            RelationGraph::from_text(["1", "2", "10", "9"], [("1", "10"), ("1", "2"), ("1", "9")])
                .unwrap();

        let succs = graph
            .successors_of(&Label::new(1))
            .map(Label::as_str)
            .collect_vec();
        assert_eq!(succs, vec!["2", "9", "10"]);
    }

    #[test]
    fn empty_graph() {
        let graph = RelationGraph::<u32>::new([], Vec::<Edge<u32>>::new());
        assert!(graph.is_empty());
        assert!(graph.is_singleton());
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn dangling_endpoints() {
        let graph = RelationGraph::new([1u32, 2], [(1, 2), (2, 5), (7, 1)]);
        assert_eq!(
            graph.dangling_edges().map(|Edge(u, v)| (*u, *v)).collect_vec(),
            vec![(2, 5), (7, 1)]
        );

        let err = RelationGraph::try_new([1u32, 2], [(1, 2), (2, 5)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::DanglingEndpoint {
                edge: "(2,5)".into(),
                endpoint: "5".into()
            }
        );
        assert_eq!(err.to_string(), "edge (2,5) references unknown vertex 5");

        assert!(RelationGraph::try_new([1u32, 2], [(1, 2)]).is_ok());
    }

    #[test]
    fn label_errors_propagate() {
        let err = RelationGraph::from_text(["1", "b"], [("1", "1")]).unwrap_err();
        assert!(matches!(err, GraphError::Label(LabelError::NotAnInteger { .. })));
    }
}
