//! Frame-ticked behaviour tree engine.
//!
//! This library provides a small, deterministic behaviour tree implementation
//! driven by an external per-frame tick. Nodes carry two independent axes of
//! state: a lifecycle [`Status`] (what phase the node is in) and a
//! [`NodeResult`] (what the node decided). A node that cannot finish within
//! one frame simply stays `Running` and is revisited on the next tick.
//!
//! - **Arena storage**: nodes live in a flat vector per [`Tree`]; children and
//!   parents are referenced by [`NodeId`], so there are no pointer cycles
//! - **One hook per tick**: each tick fires exactly one of enter/update/exit
//! - **Single failure channel**: anything a node cannot do is a
//!   [`NodeResult::Failure`], never a panic or an error value
//! - **Shared blackboard**: one [`Blackboard`] per tree is the only data
//!   channel between nodes
//!
//! # Architecture
//!
//! - [`Tree`]: arena, tick dispatch, and subtree propagation helpers
//! - [`Node`]: identity, depth, status, result, and behaviour variant
//! - [`Leaf`]: the contract game code implements for terminal behaviours
//! - Composite nodes: selector (OR) and sequencer (AND)
//! - Decorator nodes: repeat-style single-child wrapper
//! - [`builder`]: shorthand constructors for declarative tree assembly

pub mod blackboard;
pub mod builder;
mod composite;
mod decorator;
pub mod error;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use blackboard::{Blackboard, FromValue, Value};
pub use error::TreeError;
pub use node::{Leaf, Node, NodeId, NodeKind};
pub use status::{NodeResult, Status};
pub use tree::Tree;
