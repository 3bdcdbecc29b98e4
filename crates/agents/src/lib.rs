//! Stock agent behaviours on top of the behaviour tree engine.
//!
//! The engine itself is context-agnostic; this crate supplies the concrete
//! pieces a game scene needs to drive an agent:
//!
//! - [`AgentContext`]: the opaque per-entity handle passed through every tick
//! - [`nodes`]: condition and action leaves (proximity checks, idling,
//!   movement, blackboard flags)
//! - [`presets`]: prebuilt trees assembled from the stock nodes

pub mod context;
pub mod nodes;
pub mod presets;

pub use context::{AgentContext, Position};
