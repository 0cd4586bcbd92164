use std::fmt::{Debug, Display};

/// A directed edge is defined by its source and its destination.
/// Two edges are equal iff both endpoints are equal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V>(pub V, pub V);

/// Number of edges in a graph
pub type NumEdges = usize;

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V> Edge<V> {
    /// Returns the endpoint the edge leaves from
    pub fn source(&self) -> &V {
        &self.0
    }

    /// Returns the endpoint the edge points to
    pub fn destination(&self) -> &V {
        &self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self
    where
        V: Clone,
    {
        Edge(self.1.clone(), self.0.clone())
    }

    /// Splits the edge into `(source, destination)`
    pub fn into_pair(self) -> (V, V) {
        (self.0, self.1)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        value.clone()
    }
}
