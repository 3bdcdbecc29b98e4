//! Action leaves.
//!
//! Actions perform a bounded unit of work per tick and stay `InProgress`
//! across frames until their work concludes. Each leaf keeps its own state
//! (timers, counters) in per-instance fields; ticks are otherwise stateless.

use behaviour_tree::{Blackboard, Leaf, NodeResult};

use crate::context::AgentContext;

/// Waits out a fixed duration, then succeeds.
///
/// The countdown restarts every time the node is entered, so an idle inside
/// a loop waits the full duration on every cycle.
pub struct Idle {
    duration: f32,
    remaining: f32,
}

impl Idle {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
        }
    }
}

impl Leaf<AgentContext> for Idle {
    fn on_enter(&mut self, _bb: &mut Blackboard) {
        self.remaining = self.duration;
    }

    fn on_update(&mut self, dt: f32, ctx: &mut AgentContext, _bb: &mut Blackboard) -> NodeResult {
        self.remaining -= dt;
        if self.remaining < 0.0 {
            tracing::trace!(entity = ctx.entity, "idling completed");
            NodeResult::Success
        } else {
            NodeResult::InProgress
        }
    }
}

/// Steps toward the context's target at a fixed speed, succeeding on
/// arrival.
///
/// Covers at most `speed * dt` distance per tick. A non-positive or
/// non-finite speed can never arrive and fails instead.
pub struct MoveToTarget {
    /// World units per second.
    pub speed: f32,
}

impl Leaf<AgentContext> for MoveToTarget {
    fn on_update(&mut self, dt: f32, ctx: &mut AgentContext, _bb: &mut Blackboard) -> NodeResult {
        if self.speed <= 0.0 || !self.speed.is_finite() {
            return NodeResult::Failure;
        }

        let distance = ctx.distance_to_target();
        let step = self.speed * dt;
        if distance <= step {
            ctx.position = ctx.target;
            tracing::trace!(entity = ctx.entity, "reached target");
            return NodeResult::Success;
        }

        let t = step / distance;
        ctx.position.x += (ctx.target.x - ctx.position.x) * t;
        ctx.position.y += (ctx.target.y - ctx.position.y) * t;
        NodeResult::InProgress
    }
}

/// Sets a boolean blackboard flag and succeeds immediately.
pub struct RaiseFlag {
    pub key: &'static str,
}

impl Leaf<AgentContext> for RaiseFlag {
    fn on_update(&mut self, _dt: f32, _ctx: &mut AgentContext, bb: &mut Blackboard) -> NodeResult {
        bb.set(self.key, true);
        NodeResult::Success
    }
}
