/*!
`relgraph` models a finite **directed** graph over **totally ordered** vertex labels
and treats its edge set as a binary relation on the vertices.

# Representation

A vertex can be any type implementing [`Vertex`](crate::ops::Vertex), i.e. `Clone + Eq + Hash + Ord`.
Labels that are exchanged as text but ordered numerically are covered by [`Label`](crate::label::Label):
the text is parsed **once** into an integer on creation, so `"2"` sorts before `"10"`.
For **edges**, we use a simple tuple-struct `Edge(source, destination)`.

A [`RelationGraph`](crate::repr::RelationGraph) is built once from a set of vertices and a set of edges
and is never mutated afterwards. Every query is a pure function of these two sets.

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes labels, edges, the basic graph traits and the graph representation,
- [`algo`] includes algorithm traits implemented on the graph itself such as relation properties
  (`graph.is_equivalence()`), equivalence classes, roots and traversals (`graph.iterative_breadth_first_search()`),
- [`utils`] includes the FIFO/LIFO containers used by traversals and an abstraction over visited-sets,
- [`error`] includes the errors raised when labels or graphs cannot be constructed.

In most use-cases, `use relgraph::{prelude::*, algo::*};` suffices for your needs.

```rust
use relgraph::{prelude::*, algo::*};

let graph = RelationGraph::new(
    labels(["1", "2", "3", "4"]).unwrap(),
    label_edges([("1", "2"), ("1", "3"), ("2", "4")]).unwrap(),
);

assert_eq!(graph.roots(), labels(["1"]).unwrap());
assert_eq!(graph.iterative_breadth_first_search(), labels(["1", "2", "3", "4"]).unwrap());
assert_eq!(graph.iterative_depth_first_search(), labels(["1", "2", "4", "3"]).unwrap());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod label;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `relgraph::prelude` includes definitions for labels and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, label::*, ops::*, repr::*};
}
