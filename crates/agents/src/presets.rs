//! Prebuilt trees assembled from the stock nodes.
//!
//! Starting points for common agent archetypes; concrete games will usually
//! grow their own variants from the same pieces.

use behaviour_tree::builder::{leaf, repeat, selector, sequencer};
use behaviour_tree::{Tree, TreeError};

use crate::context::AgentContext;
use crate::nodes::{FlagIsSet, Idle, IsNearTarget, MoveToTarget, RaiseFlag};

/// A guard that chases its target once alerted, otherwise loiters.
///
/// ```text
/// selector "guard"
/// ├── sequencer "engage"
/// │   ├── "alerted?"   : blackboard flag raised by the host or a sibling
/// │   ├── "close in"   : walk to the target at `speed`
/// │   └── "report"     : raise the "contact" flag
/// └── "loiter"         : wait out `idle_secs`, then let the tree restart
/// ```
///
/// While un-alerted the engage branch fails fast, the guard loiters, and the
/// driver re-arms the finished tree so the flag is re-checked every cycle.
pub fn guard_tree(speed: f32, idle_secs: f32) -> Result<Tree<AgentContext>, TreeError> {
    Tree::from_plan(
        "guard",
        selector(
            "guard",
            vec![
                sequencer(
                    "engage",
                    vec![
                        leaf("alerted?", FlagIsSet { key: "alerted" }),
                        leaf("close in", MoveToTarget { speed }),
                        leaf("report", RaiseFlag { key: "contact" }),
                    ],
                ),
                leaf("loiter", Idle::new(idle_secs)),
            ],
        ),
    )
}

/// A patrol loop that never ends: walk to the target, pause, repeat.
///
/// ```text
/// repeat "patrol"
/// └── sequencer "leg"
///     ├── "walk"  : move to the target at `speed`
///     └── "pause" : idle for `pause_secs`
/// ```
pub fn patrol_tree(speed: f32, pause_secs: f32) -> Result<Tree<AgentContext>, TreeError> {
    Tree::from_plan(
        "patrol",
        repeat(
            "patrol",
            sequencer(
                "leg",
                vec![
                    leaf("walk", MoveToTarget { speed }),
                    leaf("pause", Idle::new(pause_secs)),
                ],
            ),
        ),
    )
}

/// A sentry that succeeds once its target wanders close enough.
///
/// ```text
/// sequencer "sentry"
/// ├── "near?"  : proximity check against `radius`
/// └── "report" : raise the "contact" flag
/// ```
pub fn sentry_tree(radius: f32) -> Result<Tree<AgentContext>, TreeError> {
    Tree::from_plan(
        "sentry",
        sequencer(
            "sentry",
            vec![
                leaf("near?", IsNearTarget { radius }),
                leaf("report", RaiseFlag { key: "contact" }),
            ],
        ),
    )
}
