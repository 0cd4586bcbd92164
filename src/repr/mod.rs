/*!
# Graph Representation

[`RelationGraph`] is the only representation: an immutable directed graph over ordered vertices.
It can be created directly from collections of vertices and edges or through the
setter-style [`GraphBuilder`].
*/

use crate::{edge::*, ops::*};

mod builder;
mod relation;

pub use builder::*;
pub use relation::*;
