//! Arena node storage and the leaf contract.
//!
//! Nodes live in a flat vector owned by their [`Tree`](crate::Tree) and refer
//! to each other by [`NodeId`]. The set of built-in behaviours is closed:
//! game code extends the engine only through the [`Leaf`] trait.

use crate::blackboard::Blackboard;
use crate::status::{NodeResult, Status};

/// Index of a node within its tree's arena.
///
/// Only meaningful for the tree that produced it; ids from other trees
/// resolve to nothing (a guarded no-op, never a crash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Coarse classification of a node, reported by
/// [`Tree::kind_of`](crate::Tree::kind_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum NodeKind {
    /// Composite node that orders and interprets children (selector,
    /// sequencer).
    ControlFlow,
    /// Single-child wrapper that reinterprets its child (repeat).
    Decorator,
    /// Terminal behaviour supplied by game code.
    Leaf,
    /// The tree's root node, whatever its behaviour.
    Root,
    /// An id that does not resolve to a node in the queried tree.
    Unknown,
}

/// A terminal behaviour supplied by game code.
///
/// The engine defines the contract but not the content: `on_update` performs
/// a bounded unit of work per tick and reports how it went. Returning
/// [`NodeResult::InProgress`] keeps the node `Running` for another frame;
/// `Success`/`Failure` end the node's active phase through the engine's
/// completion path. Each tick is stateless beyond the leaf's own fields
/// (a timer leaf counts its own countdown down by `dt` every call).
pub trait Leaf<C>: Send + Sync {
    /// Called once when the node is entered, before its first update.
    fn on_enter(&mut self, blackboard: &mut Blackboard) {
        let _ = blackboard;
    }

    /// Performs one tick's worth of work.
    fn on_update(&mut self, dt: f32, ctx: &mut C, blackboard: &mut Blackboard) -> NodeResult;

    /// Cleanup hook, fired when the node is ticked while exiting. Must not
    /// make decisions; status and result are already final at this point.
    fn on_exit(&mut self, blackboard: &mut Blackboard) {
        let _ = blackboard;
    }
}

/// Closures usable as leaves directly, for compact conditions and tests.
impl<C, F> Leaf<C> for F
where
    F: FnMut(f32, &mut C, &mut Blackboard) -> NodeResult + Send + Sync,
{
    fn on_update(&mut self, dt: f32, ctx: &mut C, blackboard: &mut Blackboard) -> NodeResult {
        self(dt, ctx, blackboard)
    }
}

/// The closed set of node behaviours, with per-node scratch state.
pub(crate) enum Behaviour<C> {
    Selector { cursor: usize },
    Sequencer { cursor: usize },
    Repeat { counter: u32 },
    Leaf(Box<dyn Leaf<C>>),
}

/// A unit of behaviour in the tree.
///
/// Holds identity (name, depth), arena links (parent, ordered children),
/// the two lifecycle axes (status, result), and the behaviour variant.
/// Constructed detached via [`Node::selector`] and friends, then wired into
/// a tree with [`Tree::set_root`](crate::Tree::set_root) or
/// [`Tree::add_child`](crate::Tree::add_child).
pub struct Node<C> {
    pub(crate) name: String,
    pub(crate) depth: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) status: Status,
    pub(crate) result: NodeResult,
    pub(crate) behaviour: Behaviour<C>,
}

impl<C> Node<C> {
    fn with_behaviour(name: impl Into<String>, behaviour: Behaviour<C>) -> Self {
        Self {
            name: name.into(),
            depth: 0,
            parent: None,
            children: Vec::new(),
            status: Status::Ready,
            result: NodeResult::InProgress,
            behaviour,
        }
    }

    /// Creates a selector (short-circuit OR over its children).
    pub fn selector(name: impl Into<String>) -> Self {
        Self::with_behaviour(name, Behaviour::Selector { cursor: 0 })
    }

    /// Creates a sequencer (short-circuit AND over its children).
    pub fn sequencer(name: impl Into<String>) -> Self {
        Self::with_behaviour(name, Behaviour::Sequencer { cursor: 0 })
    }

    /// Creates a repeat decorator wrapping a single child.
    pub fn repeat(name: impl Into<String>) -> Self {
        Self::with_behaviour(name, Behaviour::Repeat { counter: 0 })
    }

    /// Creates a leaf node from a [`Leaf`] implementation.
    pub fn leaf(name: impl Into<String>, behaviour: impl Leaf<C> + 'static) -> Self {
        Self::with_behaviour(name, Behaviour::Leaf(Box::new(behaviour)))
    }

    /// The node's name. Not necessarily unique within a tree.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depth in the tree; the root is 0. Assigned when attached.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The parent node, if this node has been attached as a child.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered children; insertion order is evaluation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Current lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current execution result. Final once [`Self::status`] is `Exiting`.
    pub fn result(&self) -> NodeResult {
        self.result
    }

    /// Classification of this node's behaviour variant.
    pub fn kind(&self) -> NodeKind {
        match self.behaviour {
            Behaviour::Selector { .. } | Behaviour::Sequencer { .. } => NodeKind::ControlFlow,
            Behaviour::Repeat { .. } => NodeKind::Decorator,
            Behaviour::Leaf(_) => NodeKind::Leaf,
        }
    }

    /// Returns `true` if the node may be entered on its next tick.
    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    /// Returns `true` if the node is actively running.
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Returns `true` if the node is parked.
    pub fn is_suspended(&self) -> bool {
        self.status.is_suspended()
    }

    /// Returns `true` if the node's result is `Success`.
    pub fn has_succeeded(&self) -> bool {
        self.result.is_success()
    }

    /// Returns `true` if the node's result is `Failure`.
    pub fn has_failed(&self) -> bool {
        self.result.is_failure()
    }
}
