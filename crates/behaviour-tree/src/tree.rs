//! Tree storage, tick dispatch, and subtree propagation.
//!
//! A [`Tree`] owns its node arena and one [`Blackboard`]. An external driver
//! calls [`Tree::tick`] once per logical frame; every state transition
//! happens inline within that call. There are no suspension points or
//! callbacks; `Running` status is the sole mechanism for spanning frames.

use crate::blackboard::Blackboard;
use crate::error::TreeError;
use crate::node::{Behaviour, Node, NodeId, NodeKind};
use crate::status::{NodeResult, Status};

/// A behaviour tree: flat node arena, root id, and shared blackboard.
///
/// Trees are built programmatically via [`Tree::set_root`] and
/// [`Tree::add_child`] before the first tick. The shape is static; children
/// are never removed at runtime.
pub struct Tree<C> {
    name: String,
    nodes: Vec<Node<C>>,
    root: Option<NodeId>,
    blackboard: Blackboard,
}

impl<C> Tree<C> {
    /// Creates an empty tree with its own fresh blackboard.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            root: None,
            blackboard: Blackboard::new(),
        }
    }

    /// The tree's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root node id, once one has been set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Shared blackboard, scoped to this tree.
    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    /// Mutable access to the shared blackboard, e.g. for the host to seed
    /// keys before ticking.
    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<C>> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Classifies a node: `Root` for the root id, the behaviour's kind for
    /// any other resolvable id, `Unknown` for an id this tree does not hold.
    pub fn kind_of(&self, id: NodeId) -> NodeKind {
        match (self.root, self.nodes.get(id.index())) {
            (Some(root), Some(_)) if root == id => NodeKind::Root,
            (_, Some(node)) => node.kind(),
            (_, None) => NodeKind::Unknown,
        }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Installs `node` as the root (depth 0).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::RootAlreadySet`] if the tree already has a root.
    pub fn set_root(&mut self, node: Node<C>) -> Result<NodeId, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::RootAlreadySet);
        }
        let id = self.push(node, 0, None);
        self.root = Some(id);
        Ok(id)
    }

    /// Appends `node` to `parent`'s ordered child list, wiring the parent
    /// back-reference and setting depth to the parent's depth plus one.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not resolve, is a leaf, or is a
    /// decorator that already wraps a child.
    pub fn add_child(&mut self, parent: NodeId, node: Node<C>) -> Result<NodeId, TreeError> {
        let parent_node = self
            .nodes
            .get(parent.index())
            .ok_or(TreeError::UnknownNode(parent))?;
        match parent_node.behaviour {
            Behaviour::Leaf(_) => {
                return Err(TreeError::LeafWithChild {
                    name: parent_node.name.clone(),
                });
            }
            Behaviour::Repeat { .. } if !parent_node.children.is_empty() => {
                return Err(TreeError::DecoratorFull {
                    name: parent_node.name.clone(),
                });
            }
            _ => {}
        }
        let depth = parent_node.depth + 1;
        let id = self.push(node, depth, Some(parent));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn push(&mut self, mut node: Node<C>, depth: u32, parent: Option<NodeId>) -> NodeId {
        node.depth = depth;
        node.parent = parent;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Ticking
    // ------------------------------------------------------------------

    /// Driver entry point: ticks the root once for this frame.
    ///
    /// `ctx` is an opaque handle passed through unchanged to every leaf's
    /// update. A root that has finished exiting is re-armed to `Ready` so
    /// the tree starts over on the next frame; a suspended root stays
    /// suspended. A tree without a root is a no-op.
    pub fn tick(&mut self, dt: f32, ctx: &mut C) {
        let Some(root) = self.root else {
            return;
        };
        let was_exiting = self.nodes[root.index()].status.is_exiting();
        self.tick_node(root, dt, ctx);
        // Re-arm only after the exit pass has had its tick, and only from
        // Exiting: the previous result stays readable until re-entry.
        if was_exiting && self.nodes[root.index()].status.is_exiting() {
            tracing::debug!(tree = %self.name, "root finished, re-arming");
            self.nodes[root.index()].status = Status::Ready;
        }
    }

    /// Ticks one node: dispatches to exactly one lifecycle hook based on
    /// current status. Suspended nodes and unresolvable ids are no-ops.
    pub fn tick_node(&mut self, id: NodeId, dt: f32, ctx: &mut C) {
        let Some(node) = self.nodes.get(id.index()) else {
            tracing::debug!(id = id.0, "tick on unknown node id ignored");
            return;
        };
        match node.status {
            Status::Ready => self.enter(id),
            Status::Running => self.update(id, dt, ctx),
            Status::Exiting => self.exit(id),
            Status::Suspended => {}
        }
    }

    /// Enter pass: the node becomes `Running`/`InProgress` and every
    /// descendant is reset to `Ready`/`InProgress`, so a freshly
    /// (re)entered subtree always starts clean. Composite cursors and
    /// decorator counters reset here too.
    fn enter(&mut self, id: NodeId) {
        {
            let node = &mut self.nodes[id.index()];
            node.status = Status::Running;
            node.result = NodeResult::InProgress;
            match &mut node.behaviour {
                Behaviour::Selector { cursor } | Behaviour::Sequencer { cursor } => *cursor = 0,
                Behaviour::Repeat { counter } => *counter = 0,
                Behaviour::Leaf(_) => {}
            }
            tracing::trace!(name = %node.name, depth = node.depth, "entering node");
        }
        self.set_status_children(id, Status::Ready);
        self.set_result_children(id, NodeResult::InProgress);
        if let Behaviour::Leaf(leaf) = &mut self.nodes[id.index()].behaviour {
            leaf.on_enter(&mut self.blackboard);
        }
    }

    /// Update pass: composites and decorators delegate to their children;
    /// leaves perform one bounded unit of work and report a decision.
    fn update(&mut self, id: NodeId, dt: f32, ctx: &mut C) {
        match self.nodes[id.index()].behaviour {
            Behaviour::Selector { .. } => self.update_selector(id, dt, ctx),
            Behaviour::Sequencer { .. } => self.update_sequencer(id, dt, ctx),
            Behaviour::Repeat { .. } => self.update_repeat(id, dt, ctx),
            Behaviour::Leaf(_) => self.update_leaf(id, dt, ctx),
        }
    }

    fn update_leaf(&mut self, id: NodeId, dt: f32, ctx: &mut C) {
        let decision = match &mut self.nodes[id.index()].behaviour {
            Behaviour::Leaf(leaf) => leaf.on_update(dt, ctx, &mut self.blackboard),
            _ => return,
        };
        match decision {
            NodeResult::Success => self.on_success(id),
            NodeResult::Failure => self.on_failure(id),
            NodeResult::InProgress => {}
        }
    }

    /// Exit pass: fires the leaf cleanup hook. Status and result are
    /// already final and stay untouched.
    fn exit(&mut self, id: NodeId) {
        if let Behaviour::Leaf(leaf) = &mut self.nodes[id.index()].behaviour {
            leaf.on_exit(&mut self.blackboard);
        }
        let node = &self.nodes[id.index()];
        tracing::trace!(name = %node.name, result = %node.result, "exiting node");
    }

    // ------------------------------------------------------------------
    // Completion and propagation
    // ------------------------------------------------------------------

    /// Ends a node's active phase with `Success`. The only sanctioned way,
    /// together with [`Tree::on_failure`], to drive a node to `Exiting`.
    pub fn on_success(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        node.status = Status::Exiting;
        node.result = NodeResult::Success;
        tracing::trace!(name = %node.name, "node succeeded");
    }

    /// Ends a node's active phase with `Failure`.
    pub fn on_failure(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        node.status = Status::Exiting;
        node.result = NodeResult::Failure;
        tracing::trace!(name = %node.name, "node failed");
    }

    /// Sets one node's status. Unresolvable ids are ignored.
    pub fn set_status(&mut self, id: NodeId, status: Status) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.status = status;
        }
    }

    /// Sets the status of a node and every descendant, depth-first.
    pub fn set_status_all(&mut self, id: NodeId, status: Status) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        node.status = status;
        let children = node.children.clone();
        for child in children {
            self.set_status_all(child, status);
        }
    }

    /// Sets the status of every descendant of a node, depth-first, leaving
    /// the node itself untouched.
    pub fn set_status_children(&mut self, id: NodeId, status: Status) {
        let Some(node) = self.nodes.get(id.index()) else {
            return;
        };
        for child in node.children.clone() {
            self.set_status_all(child, status);
        }
    }

    /// Sets one node's result. Unresolvable ids are ignored.
    pub fn set_result(&mut self, id: NodeId, result: NodeResult) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.result = result;
        }
    }

    /// Sets the result of a node and every descendant, depth-first.
    pub fn set_result_all(&mut self, id: NodeId, result: NodeResult) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        node.result = result;
        let children = node.children.clone();
        for child in children {
            self.set_result_all(child, result);
        }
    }

    /// Sets the result of every descendant of a node, depth-first, leaving
    /// the node itself untouched.
    pub fn set_result_children(&mut self, id: NodeId, result: NodeResult) {
        let Some(node) = self.nodes.get(id.index()) else {
            return;
        };
        for child in node.children.clone() {
            self.set_result_all(child, result);
        }
    }
}
