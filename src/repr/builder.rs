use tracing::debug;

use crate::error::GraphError;

use super::*;

/// Setter-style builder for a [`RelationGraph`].
///
/// By default, [`GraphBuilder::build`] rejects edges whose endpoints are not vertices.
/// Use [`GraphBuilder::allow_dangling_endpoints`] to accept them as [`RelationGraph::new`] does.
///
/// # Examples
/// ```
/// use relgraph::prelude::*;
///
/// let graph = GraphBuilder::new()
///     .vertices([1, 2, 3])
///     .edge(1, 2)
///     .edges([(2, 3), (3, 3)])
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.number_of_edges(), 3);
/// assert!(GraphBuilder::new().vertex(1).edge(1, 2).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
    allow_dangling: bool,
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            allow_dangling: false,
        }
    }
}

impl<V: Vertex> GraphBuilder<V> {
    /// Creates a builder without vertices and edges that rejects dangling endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single vertex
    pub fn vertex(mut self, u: V) -> Self {
        self.vertices.push(u);
        self
    }

    /// Adds all vertices in the collection
    pub fn vertices<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        self.vertices.extend(us);
        self
    }

    /// Adds the edge `(u, v)`
    pub fn edge(mut self, u: V, v: V) -> Self {
        self.edges.push(Edge(u, v));
        self
    }

    /// Adds all edges in the collection
    pub fn edges<E>(mut self, edges: E) -> Self
    where
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// If *true*, edges referencing unknown vertices are kept instead of rejected
    pub fn allow_dangling_endpoints(mut self, allow: bool) -> Self {
        self.allow_dangling = allow;
        self
    }

    /// Builds the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingEndpoint`] if dangling endpoints are not allowed and
    /// some edge references an unknown vertex.
    pub fn build(self) -> Result<RelationGraph<V>, GraphError> {
        if self.allow_dangling {
            debug!("building relation graph without endpoint check");
            Ok(RelationGraph::new(self.vertices, self.edges))
        } else {
            RelationGraph::try_new(self.vertices, self.edges)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_checked_graph() {
        let graph = GraphBuilder::new()
            .vertex(2u32)
            .vertices([1, 3])
            .edge(1, 2)
            .edges([Edge(2, 3), Edge(2, 3)])
            .build()
            .unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(&2, &3));
    }

    #[test]
    fn dangling_policy() {
        let builder = GraphBuilder::new().vertices([1u32, 2]).edge(2, 9);

        assert!(matches!(
            builder.clone().build(),
            Err(GraphError::DanglingEndpoint { .. })
        ));

        let graph = builder.allow_dangling_endpoints(true).build().unwrap();
        assert_eq!(graph.dangling_edges().count(), 1);
    }
}
