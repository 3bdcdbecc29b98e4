//! Construction-time errors.
//!
//! Tick-time misuse is guarded defensively (no-op or failure result, see the
//! tree's dispatch code); only tree assembly reports errors, since a
//! malformed shape is a programming mistake worth surfacing early.

use thiserror::Error;

use crate::node::NodeId;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("tree already has a root node")]
    RootAlreadySet,

    #[error("node {0:?} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("leaf node {name:?} cannot take children")]
    LeafWithChild { name: String },

    #[error("decorator {name:?} already wraps a child")]
    DecoratorFull { name: String },
}
