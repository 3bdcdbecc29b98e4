//! Builder utilities for ergonomic tree construction.
//!
//! Building a tree through [`Tree::add_child`] alone gets verbose for deep
//! shapes. These helpers let a whole tree be declared as a nested value and
//! planted in one call:
//!
//! ```rust
//! use behaviour_tree::builder::{leaf, selector, sequencer};
//! use behaviour_tree::{Blackboard, NodeResult, Tree};
//!
//! let tree: Tree<()> = Tree::from_plan(
//!     "demo",
//!     selector(
//!         "root",
//!         vec![
//!             sequencer(
//!                 "greet",
//!                 vec![leaf("hello", |_dt: f32, _ctx: &mut (), _bb: &mut Blackboard| {
//!                     NodeResult::Success
//!                 })],
//!             ),
//!         ],
//!     ),
//! )
//! .expect("well-formed plan");
//! assert!(tree.root().is_some());
//! ```

use crate::error::TreeError;
use crate::node::{Leaf, Node, NodeId};
use crate::tree::Tree;

/// A detached node together with its planned children.
pub struct NodePlan<C> {
    node: Node<C>,
    children: Vec<NodePlan<C>>,
}

/// Plans a selector with the given children.
pub fn selector<C>(name: impl Into<String>, children: Vec<NodePlan<C>>) -> NodePlan<C> {
    NodePlan {
        node: Node::selector(name),
        children,
    }
}

/// Plans a sequencer with the given children.
pub fn sequencer<C>(name: impl Into<String>, children: Vec<NodePlan<C>>) -> NodePlan<C> {
    NodePlan {
        node: Node::sequencer(name),
        children,
    }
}

/// Plans a repeat decorator around a single child.
pub fn repeat<C>(name: impl Into<String>, child: NodePlan<C>) -> NodePlan<C> {
    NodePlan {
        node: Node::repeat(name),
        children: vec![child],
    }
}

/// Plans a leaf node.
pub fn leaf<C>(name: impl Into<String>, behaviour: impl Leaf<C> + 'static) -> NodePlan<C> {
    NodePlan {
        node: Node::leaf(name, behaviour),
        children: Vec::new(),
    }
}

impl<C> Tree<C> {
    /// Builds a tree from a nested plan, wiring depths and parent links the
    /// same way incremental [`Tree::add_child`] calls would.
    pub fn from_plan(name: impl Into<String>, plan: NodePlan<C>) -> Result<Self, TreeError> {
        let mut tree = Tree::new(name);
        let root = tree.set_root(plan.node)?;
        for child in plan.children {
            attach(&mut tree, root, child)?;
        }
        Ok(tree)
    }
}

fn attach<C>(tree: &mut Tree<C>, parent: NodeId, plan: NodePlan<C>) -> Result<(), TreeError> {
    let id = tree.add_child(parent, plan.node)?;
    for child in plan.children {
        attach(tree, id, child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackboard::Blackboard;
    use crate::node::NodeKind;
    use crate::status::NodeResult;

    fn noop(_dt: f32, _ctx: &mut (), _bb: &mut Blackboard) -> NodeResult {
        NodeResult::Success
    }

    #[test]
    fn from_plan_builds_the_declared_shape() {
        let tree: Tree<()> = Tree::from_plan(
            "plan",
            selector(
                "root",
                vec![
                    sequencer("steps", vec![leaf("a", noop), leaf("b", noop)]),
                    repeat("loop", leaf("c", noop)),
                ],
            ),
        )
        .unwrap();

        let root = tree.root().unwrap();
        assert_eq!(tree.kind_of(root), NodeKind::Root);
        assert_eq!(tree.len(), 6);

        let top: Vec<_> = tree.node(root).unwrap().children().to_vec();
        assert_eq!(top.len(), 2);
        assert_eq!(tree.node(top[0]).unwrap().name(), "steps");
        assert_eq!(tree.node(top[1]).unwrap().name(), "loop");
        assert_eq!(tree.node(top[0]).unwrap().depth(), 1);

        let steps: Vec<_> = tree.node(top[0]).unwrap().children().to_vec();
        assert_eq!(steps.len(), 2);
        assert_eq!(tree.node(steps[0]).unwrap().depth(), 2);
        assert_eq!(tree.kind_of(steps[0]), NodeKind::Leaf);
    }
}
