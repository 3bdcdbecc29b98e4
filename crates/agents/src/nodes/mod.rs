//! Condition and action leaves for agent behaviour trees.

pub mod actions;
pub mod conditions;

pub use actions::{Idle, MoveToTarget, RaiseFlag};
pub use conditions::{FlagIsSet, IsNearTarget};
