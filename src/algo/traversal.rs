/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator [`TraversalSearch`] that is parameterized by its frontier
  ([`Queue`] for **BFS**, [`Stack`] for **DFS**) and by the set recording visited vertices.
- A high-level [`Traversal`] trait that exposes iterative and recursive traversals
  directly as methods on graphs.

Every traversal is seeded with the [roots](super::Roots::roots) of the graph in ascending order
and enumerates successors in ascending order. A vertex is recorded and explored at most once,
so cycles terminate. The iterative and the recursive variant of the same search produce the
identical sequence.
*/

use fxhash::FxHashSet;
use tracing::{debug, trace};

use super::*;
use crate::utils::{FromCapacity, Queue, Set, Stack};

/// Common interface for maintaining and querying visited-states
/// during a traversal.
pub trait TraversalState<S> {
    /// Returns a reference to the set of visited vertices.
    fn visited(&self) -> &S;

    /// Checks if a given vertex `u` has already been visited.
    ///
    /// For breadth-first searches, a vertex counts as visited as soon as it is discovered,
    /// i.e. possibly before the iterator yields it.
    fn did_visit<T>(&self, u: &T) -> bool
    where
        S: Set<T>,
    {
        self.visited().contains(u)
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `VertexSequencer` is responsible for storing the "to be visited"
/// vertices during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`Queue`] -> FIFO semantics -> **BFS**
/// - [`Stack`] -> LIFO semantics -> **DFS**
pub trait VertexSequencer<T> {
    /// If *true*, a vertex is marked visited when it is pushed (BFS).
    /// Otherwise it is marked when it is popped and duplicates on the frontier are skipped (DFS).
    const MARK_ON_PUSH: bool;

    /// Creates an empty sequencer.
    fn empty() -> Self;

    /// Pushes a vertex into the frontier.
    fn push(&mut self, item: T);

    /// Pushes the successors of a vertex, given in ascending order, such that
    /// the smallest one is popped first among them.
    fn push_successors<I>(&mut self, successors: I)
    where
        I: IntoIterator<Item = T>;

    /// Removes and returns the next vertex from the frontier.
    fn pop(&mut self) -> Option<T>;
}

impl<T> VertexSequencer<T> for Queue<T> {
    const MARK_ON_PUSH: bool = true;

    fn empty() -> Self {
        Queue::new()
    }

    fn push(&mut self, item: T) {
        self.enqueue(item);
    }

    fn push_successors<I>(&mut self, successors: I)
    where
        I: IntoIterator<Item = T>,
    {
        for v in successors {
            self.enqueue(v);
        }
    }

    fn pop(&mut self) -> Option<T> {
        self.try_dequeue()
    }
}

impl<T> VertexSequencer<T> for Stack<T> {
    const MARK_ON_PUSH: bool = false;

    fn empty() -> Self {
        Stack::new()
    }

    fn push(&mut self, item: T) {
        Stack::push(self, item);
    }

    fn push_successors<I>(&mut self, successors: I)
    where
        I: IntoIterator<Item = T>,
    {
        // the holding stack reverses the order, so the smallest successor ends up on top
        let mut holding = Stack::new();
        for v in successors {
            holding.push(v);
        }
        holding.unload_onto(self);
    }

    fn pop(&mut self) -> Option<T> {
        self.try_pop()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of vertices to visit,
/// a set of visited vertices and the remaining seeds. Whenever the frontier runs
/// empty, the search restarts at the next unvisited seed.
pub struct TraversalSearch<'a, G, Q, S>
where
    G: AdjacencyList,
    Q: VertexSequencer<&'a G::V>,
    S: Set<&'a G::V>,
{
    graph: &'a G,
    visited: S,
    sequencer: Q,
    seeds: std::vec::IntoIter<&'a G::V>,
    stop_at: Option<&'a G::V>,
}

/// Type alias for a **breadth-first search** iterator using a custom visited-set.
pub type BFSWithSet<'a, G, S> = TraversalSearch<'a, G, Queue<&'a <G as GraphVertexOrder>::V>, S>;

/// Type alias for a **depth-first search** iterator using a custom visited-set.
pub type DFSWithSet<'a, G, S> = TraversalSearch<'a, G, Stack<&'a <G as GraphVertexOrder>::V>, S>;

/// A BFS traversal iterator over the graph, visiting vertices in breadth-first order.
pub type BFS<'a, G> = BFSWithSet<'a, G, FxHashSet<&'a <G as GraphVertexOrder>::V>>;

/// A DFS traversal iterator over the graph, visiting vertices in depth-first order.
pub type DFS<'a, G> = DFSWithSet<'a, G, FxHashSet<&'a <G as GraphVertexOrder>::V>>;

impl<'a, G, Q, S> TraversalState<S> for TraversalSearch<'a, G, Q, S>
where
    G: AdjacencyList,
    Q: VertexSequencer<&'a G::V>,
    S: Set<&'a G::V>,
{
    fn visited(&self) -> &S {
        &self.visited
    }
}

impl<'a, G, Q, S> Iterator for TraversalSearch<'a, G, Q, S>
where
    G: AdjacencyList,
    Q: VertexSequencer<&'a G::V>,
    S: Set<&'a G::V>,
{
    type Item = &'a G::V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(u) = self.sequencer.pop() else {
                let seed = self.seeds.find(|u| !self.visited.contains(u))?;
                if Q::MARK_ON_PUSH {
                    self.visited.insert(seed);
                }
                self.sequencer.push(seed);
                continue;
            };

            if !Q::MARK_ON_PUSH {
                if self.visited.contains(&u) {
                    continue;
                }
                self.visited.insert(u);
            }

            trace!(vertex = ?u, "visit");

            if self.stop_at == Some(u) {
                while self.sequencer.pop().is_some() {} // drop all
                self.seeds = Vec::new().into_iter();
                return Some(u);
            }

            let graph = self.graph;
            let visited = &mut self.visited;
            let successors = graph.successors_of(u);
            if Q::MARK_ON_PUSH {
                for v in successors {
                    if !visited.contains(&v) {
                        visited.insert(v);
                        self.sequencer.push(v);
                    }
                }
            } else {
                self.sequencer
                    .push_successors(successors.filter(|v| !visited.contains(v)));
            }

            return Some(u);
        }
    }
}

impl<'a, G, Q, S> TraversalSearch<'a, G, Q, S>
where
    G: AdjacencyList,
    Q: VertexSequencer<&'a G::V>,
    S: Set<&'a G::V> + FromCapacity,
{
    /// Creates a new traversal iterator that is seeded with `seeds` in the given order.
    pub fn with_seeds<I>(graph: &'a G, seeds: I) -> Self
    where
        I: IntoIterator<Item = &'a G::V>,
    {
        let seeds: Vec<_> = seeds.into_iter().collect();
        debug!(seeds = seeds.len(), "starting traversal");

        Self {
            graph,
            visited: S::from_capacity(graph.len()),
            sequencer: Q::empty(),
            seeds: seeds.into_iter(),
            stop_at: None,
        }
    }

    /// Creates a new traversal iterator starting from `start` only.
    pub fn new(graph: &'a G, start: &'a G::V) -> Self {
        Self::with_seeds(graph, [start])
    }
}

impl<'a, G, Q, S> TraversalSearch<'a, G, Q, S>
where
    G: Roots,
    Q: VertexSequencer<&'a G::V>,
    S: Set<&'a G::V> + FromCapacity,
{
    /// Creates a new traversal iterator seeded with all roots of `graph` in ascending order.
    pub fn from_roots(graph: &'a G) -> Self {
        Self::with_seeds(graph, graph.roots_iter())
    }
}

impl<'a, G, Q, S> TraversalSearch<'a, G, Q, S>
where
    G: AdjacencyList,
    Q: VertexSequencer<&'a G::V>,
    S: Set<&'a G::V>,
{
    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: &'a G::V) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: &'a G::V) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited,
    /// i.e. it is never yielded and no edges out of it will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect for a breadth-first search if the vertex is already
    /// in the frontier. It is therefore highly recommended to call this method directly after
    /// the constructor.
    pub fn exclude_vertex(&mut self, u: &'a G::V) {
        self.visited.insert(u);
    }

    /// Excludes a vertex from the search; see [`TraversalSearch::exclude_vertex`].
    pub fn with_vertex_excluded(mut self, u: &'a G::V) -> Self {
        self.exclude_vertex(u);
        self
    }

    /// Excludes multiple vertices from the search. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_vertex`].
    pub fn with_vertices_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = &'a G::V>,
    {
        for u in us {
            self.exclude_vertex(u);
        }
        self
    }
}

fn recursive_bfs_layer<'a, G, S>(
    graph: &'a G,
    layer: Vec<&'a G::V>,
    visited: &mut S,
    order: &mut Vec<&'a G::V>,
)
where
    G: AdjacencyList,
    S: Set<&'a G::V>,
{
    if layer.is_empty() {
        return;
    }

    let mut next_layer = Vec::new();
    for u in layer {
        for v in graph.successors_of(u) {
            if !visited.contains(&v) {
                visited.insert(v);
                order.push(v);
                next_layer.push(v);
            }
        }
    }

    recursive_bfs_layer(graph, next_layer, visited, order);
}

fn recursive_dfs_visit<'a, G, S>(
    graph: &'a G,
    u: &'a G::V,
    visited: &mut S,
    order: &mut Vec<&'a G::V>,
)
where
    G: AdjacencyList,
    S: Set<&'a G::V>,
{
    visited.insert(u);
    order.push(u);

    for v in graph.successors_of(u) {
        if !visited.contains(&v) {
            recursive_dfs_visit(graph, v, visited, order);
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS) seeded with the roots of a graph.
pub trait Traversal: Roots {
    /// Returns an iterator that traverses all vertices reachable from the roots
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use relgraph::{prelude::*, algo::*};
    ///
    /// let g = RelationGraph::new([1, 2, 3, 4], [(1, 2), (1, 3), (2, 4)]);
    ///
    /// let order: Vec<_> = g.bfs().copied().collect();
    /// assert_eq!(order, vec![1, 2, 3, 4]);
    /// ```
    fn bfs(&self) -> BFS<'_, Self> {
        BFS::from_roots(self)
    }

    /// Returns an iterator that traverses all vertices reachable from the roots
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use relgraph::{prelude::*, algo::*};
    ///
    /// let g = RelationGraph::new([1, 2, 3, 4], [(1, 2), (1, 3), (2, 4)]);
    ///
    /// let order: Vec<_> = g.dfs().copied().collect();
    /// assert_eq!(order, vec![1, 2, 4, 3]);
    /// ```
    fn dfs(&self) -> DFS<'_, Self> {
        DFS::from_roots(self)
    }

    /// Returns an iterator that traverses all vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    fn bfs_from<'a>(&'a self, start: &'a Self::V) -> BFS<'a, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses all vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs_from<'a>(&'a self, start: &'a Self::V) -> DFS<'a, Self> {
        DFS::new(self, start)
    }

    /// Returns all vertices reachable from the roots in BFS order using an explicit queue.
    fn iterative_breadth_first_search(&self) -> Vec<Self::V> {
        self.bfs().cloned().collect()
    }

    /// Returns all vertices reachable from the roots in BFS order.
    /// Recurses once per BFS layer, so the recursion depth is bounded by the number of layers.
    /// On a path this equals the number of vertices, as for [`Traversal::recursive_depth_first_search`].
    fn recursive_breadth_first_search(&self) -> Vec<Self::V> {
        let mut visited = FxHashSet::from_capacity(self.len());
        let mut order = Vec::with_capacity(self.len());

        for root in self.roots_iter() {
            if !visited.contains(&root) {
                visited.insert(root);
                order.push(root);
                recursive_bfs_layer(self, vec![root], &mut visited, &mut order);
            }
        }

        order.into_iter().cloned().collect()
    }

    /// Returns all vertices reachable from the roots in DFS order using an explicit stack.
    fn iterative_depth_first_search(&self) -> Vec<Self::V> {
        self.dfs().cloned().collect()
    }

    /// Returns all vertices reachable from the roots in DFS order.
    /// Recurses once per visited vertex, so the recursion depth is bounded by the number of vertices.
    fn recursive_depth_first_search(&self) -> Vec<Self::V> {
        let mut visited = FxHashSet::from_capacity(self.len());
        let mut order = Vec::with_capacity(self.len());

        for root in self.roots_iter() {
            if !visited.contains(&root) {
                recursive_dfs_visit(self, root, &mut visited, &mut order);
            }
        }

        order.into_iter().cloned().collect()
    }
}

impl<G> Traversal for G where G: Roots {}
