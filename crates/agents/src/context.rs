//! Tick context handed to every leaf.
//!
//! The host owns the scene; each frame it passes a mutable [`AgentContext`]
//! through the tree unchanged. Leaves read and write it directly; the
//! blackboard is reserved for node-to-node communication.

/// Position in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Per-entity state a behaviour tree acts on.
///
/// One context per agent, matching one tree per agent; trees never share
/// contexts or blackboards.
#[derive(Debug, Clone)]
pub struct AgentContext {
    /// Opaque entity id, used only for logging.
    pub entity: u64,

    /// Where the agent currently stands. Movement leaves mutate this.
    pub position: Position,

    /// Where the agent is headed or watching.
    pub target: Position,
}

impl AgentContext {
    pub fn new(entity: u64, position: Position, target: Position) -> Self {
        Self {
            entity,
            position,
            target,
        }
    }

    /// Distance from the agent to its target.
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }
}
