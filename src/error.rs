/*!
# Errors

Queries on a [`RelationGraph`](crate::repr::RelationGraph) never fail.
Only the construction of labels from text and the checked construction of graphs can.
*/

use std::num::ParseIntError;

use thiserror::Error;

/// Raised when a text label does not hold a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label `{text}` is not a base-10 integer")]
    NotAnInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Raised by the checked constructors of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge references a vertex that is not part of the vertex set
    #[error("edge {edge} references unknown vertex {endpoint}")]
    DanglingEndpoint { edge: String, endpoint: String },

    #[error(transparent)]
    Label(#[from] LabelError),
}
