//! Condition leaves.
//!
//! Conditions check the context or blackboard and decide within a single
//! update: they never stay `InProgress`. A condition that cannot be
//! evaluated reports failure, the engine's only failure channel.

use behaviour_tree::{Blackboard, Leaf, NodeResult};

use crate::context::AgentContext;

/// Succeeds when the agent is within `radius` of its target.
///
/// # Example
///
/// ```rust,ignore
/// use behaviour_tree::builder::{leaf, sequencer};
///
/// // Close the distance, then hold position
/// sequencer("engage", vec![
///     leaf("near?", IsNearTarget { radius: 1.5 }),
///     leaf("hold", Idle::new(2.0)),
/// ]);
/// ```
pub struct IsNearTarget {
    /// Inclusive distance threshold, in world units.
    pub radius: f32,
}

impl Leaf<AgentContext> for IsNearTarget {
    fn on_update(&mut self, _dt: f32, ctx: &mut AgentContext, _bb: &mut Blackboard) -> NodeResult {
        if ctx.distance_to_target() <= self.radius {
            NodeResult::Success
        } else {
            NodeResult::Failure
        }
    }
}

/// Succeeds when a boolean blackboard flag is set.
///
/// The counterpart to [`RaiseFlag`](crate::nodes::RaiseFlag): one branch of
/// a tree raises the flag, another reacts to it, with no direct coupling
/// between the two.
pub struct FlagIsSet {
    pub key: &'static str,
}

impl Leaf<AgentContext> for FlagIsSet {
    fn on_update(&mut self, _dt: f32, _ctx: &mut AgentContext, bb: &mut Blackboard) -> NodeResult {
        if bb.get_or_default::<bool>(self.key) {
            NodeResult::Success
        } else {
            NodeResult::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Position;

    fn ctx(distance: f32) -> AgentContext {
        AgentContext::new(
            1,
            Position::new(0.0, 0.0),
            Position::new(distance, 0.0),
        )
    }

    #[test]
    fn near_target_checks_radius() {
        let mut bb = Blackboard::new();

        let mut near = IsNearTarget { radius: 2.0 };
        assert_eq!(near.on_update(0.1, &mut ctx(1.0), &mut bb), NodeResult::Success);
        assert_eq!(near.on_update(0.1, &mut ctx(2.0), &mut bb), NodeResult::Success);
        assert_eq!(near.on_update(0.1, &mut ctx(5.0), &mut bb), NodeResult::Failure);
    }

    #[test]
    fn flag_condition_reads_blackboard() {
        let mut bb = Blackboard::new();
        let mut flag = FlagIsSet { key: "alerted" };

        assert_eq!(flag.on_update(0.1, &mut ctx(0.0), &mut bb), NodeResult::Failure);
        bb.set("alerted", true);
        assert_eq!(flag.on_update(0.1, &mut ctx(0.0), &mut bb), NodeResult::Success);
        // A mismatched kind under the key reads as unset, not as an error.
        bb.set("alerted", 1i64);
        assert_eq!(flag.on_update(0.1, &mut ctx(0.0), &mut bb), NodeResult::Failure);
    }
}
