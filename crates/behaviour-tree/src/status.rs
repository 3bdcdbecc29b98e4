//! Lifecycle status and execution result of behaviour nodes.
//!
//! The two enums are deliberately independent axes: [`Status`] answers "what
//! phase is this node in" (orchestration), [`NodeResult`] answers "what was
//! decided" (outcome). A result is only final once the status has reached
//! [`Status::Exiting`].

/// The lifecycle phase of a behaviour node.
///
/// The tick dispatcher fires exactly one hook per call based on this value:
/// `Ready` runs the enter pass, `Running` the update pass, `Exiting` the exit
/// pass. `Suspended` nodes are not advanced at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The node may be entered on its next tick.
    Ready,

    /// The node is actively advancing its work each tick.
    Running,

    /// The node has succeeded or failed; its result is final.
    Exiting,

    /// The node is parked; ticking it is a no-op.
    Suspended,
}

impl Status {
    /// Returns `true` if this status is `Ready`.
    #[inline]
    pub fn is_ready(self) -> bool {
        matches!(self, Status::Ready)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Exiting`.
    #[inline]
    pub fn is_exiting(self) -> bool {
        matches!(self, Status::Exiting)
    }

    /// Returns `true` if this status is `Suspended`.
    #[inline]
    pub fn is_suspended(self) -> bool {
        matches!(self, Status::Suspended)
    }
}

/// The outcome of evaluating a behaviour node.
///
/// There is exactly one failure channel: a leaf that cannot complete its
/// intended action (missing target, out of range) reports `Failure` here,
/// never an engine-level fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeResult {
    /// The node is still being run; no decision has been made yet.
    InProgress,

    /// The behaviour completed successfully.
    ///
    /// For conditions: the condition was met.
    /// For actions: the action executed without problems.
    Success,

    /// The behaviour failed.
    ///
    /// For conditions: the condition was not met.
    /// For actions: the action could not be carried out.
    Failure,
}

impl NodeResult {
    /// Returns `true` if this result is `InProgress`.
    #[inline]
    pub fn is_in_progress(self) -> bool {
        matches!(self, NodeResult::InProgress)
    }

    /// Returns `true` if this result is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, NodeResult::Success)
    }

    /// Returns `true` if this result is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, NodeResult::Failure)
    }
}
