use std::{fmt::Debug, hash::Hash};

use crate::edge::*;

/// Vertices can be any totally ordered, hashable and clonable value.
/// The total order is used for every "sorted" output and for successor enumeration.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Number of vertices in a graph
pub type NumVertices = usize;

/// Provides getters pertaining to the vertex-set of a graph
pub trait GraphVertexOrder {
    /// Type of the vertices of the graph
    type V: Vertex;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices()
    }

    /// Returns an iterator over V in ascending order.
    fn vertices(&self) -> impl Iterator<Item = &Self::V> + '_;

    /// Returns *true* if `u` is a vertex of the graph
    fn has_vertex(&self, u: &Self::V) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for successors & edges
pub trait AdjacencyList: GraphVertexOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the successors of a given vertex in ascending order,
    /// i.e. all `v` with an edge `(u, v)`.
    /// Unknown vertices have no successors.
    fn successors_of<'a>(&'a self, u: &Self::V) -> impl Iterator<Item = &'a Self::V> + 'a;

    /// Returns the number of outgoing edges of `u`
    fn out_degree_of(&self, u: &Self::V) -> NumVertices {
        self.successors_of(u).count()
    }

    /// Returns the number of incoming edges of `u`
    fn in_degree_of(&self, u: &Self::V) -> NumVertices;

    /// Returns an iterator over outgoing edges of a given vertex in ascending order of destination.
    fn edges_of<'a>(&'a self, u: &'a Self::V) -> impl Iterator<Item = Edge<&'a Self::V>> + 'a {
        self.successors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn edges(&self) -> impl Iterator<Item = Edge<&Self::V>> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphVertexOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    fn has_edge(&self, u: &Self::V, v: &Self::V) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: &Self::V) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    fn has_bidirected_edge(&self, u: &Self::V, v: &Self::V) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}
