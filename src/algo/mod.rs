/*!
# Graph Algorithms

This module provides the algorithms built on top of [`RelationGraph`](crate::repr::RelationGraph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use relgraph::algo::*;
```
and gain access to relation properties, equivalence classes, roots and traversals.
All of them are implemented as traits on the graph itself; traversals are also provided as
**iterators**, making it easy to consume results lazily.
*/

mod equivalence;
mod relation;
mod roots;
pub mod traversal;

use crate::prelude::*;

pub use equivalence::*;
pub use relation::*;
pub use roots::*;
pub use traversal::*;
