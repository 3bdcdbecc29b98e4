//! Composite update algorithms: selector (OR) and sequencer (AND).
//!
//! Both composites keep a cursor into their ordered child list and advance
//! strictly one child's state machine per parent tick. Children past the
//! first success/failure are never ticked in the same frame.

use crate::node::{Behaviour, NodeId};
use crate::tree::Tree;

impl<C> Tree<C> {
    /// Selector: tick only the child under the cursor.
    ///
    /// - Child success: the selector succeeds immediately (short-circuit OR)
    /// - Child failure: advance the cursor; exhausting the list fails the
    ///   selector
    /// - Child running: nothing further this tick
    ///
    /// A selector with no children fails immediately, as does a cursor that
    /// somehow points past the list.
    pub(crate) fn update_selector(&mut self, id: NodeId, dt: f32, ctx: &mut C) {
        let (child, cursor, child_count) = {
            let Some(node) = self.node(id) else { return };
            let cursor = match node.behaviour {
                Behaviour::Selector { cursor } => cursor,
                _ => return,
            };
            (
                node.children.get(cursor).copied(),
                cursor,
                node.children.len(),
            )
        };
        let Some(child) = child else {
            // Empty child list, or a cursor out of range: every option is
            // exhausted, so the selector fails.
            tracing::debug!(id = id.0, "selector has no child to try, failing");
            self.on_failure(id);
            return;
        };

        self.tick_node(child, dt, ctx);

        let Some(child_node) = self.node(child) else {
            return;
        };
        if child_node.has_succeeded() {
            self.on_success(id);
        } else if child_node.has_failed() {
            let next = cursor + 1;
            if let Some(node) = self.node_mut(id)
                && let Behaviour::Selector { cursor } = &mut node.behaviour
            {
                *cursor = next;
            }
            if next == child_count {
                self.on_failure(id);
            }
        }
    }

    /// Sequencer: tick only the child under the cursor.
    ///
    /// - Child failure: the sequencer fails immediately (short-circuit AND)
    /// - Child success: advance the cursor; reaching the end means every
    ///   child succeeded, so the sequencer succeeds
    /// - Child running: nothing further this tick
    ///
    /// A cursor already at or past the child count succeeds immediately,
    /// which also makes an empty sequencer vacuously successful.
    pub(crate) fn update_sequencer(&mut self, id: NodeId, dt: f32, ctx: &mut C) {
        let (child, cursor, child_count) = {
            let Some(node) = self.node(id) else { return };
            let cursor = match node.behaviour {
                Behaviour::Sequencer { cursor } => cursor,
                _ => return,
            };
            (
                node.children.get(cursor).copied(),
                cursor,
                node.children.len(),
            )
        };
        let Some(child) = child else {
            self.on_success(id);
            return;
        };

        self.tick_node(child, dt, ctx);

        let Some(child_node) = self.node(child) else {
            return;
        };
        if child_node.has_failed() {
            self.on_failure(id);
        } else if child_node.has_succeeded() {
            let next = cursor + 1;
            if let Some(node) = self.node_mut(id)
                && let Behaviour::Sequencer { cursor } = &mut node.behaviour
            {
                *cursor = next;
            }
            if next >= child_count {
                self.on_success(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::blackboard::Blackboard;
    use crate::node::Node;
    use crate::status::{NodeResult, Status};
    use crate::tree::Tree;

    /// Counts its updates on the blackboard, then reports a fixed verdict.
    fn counting(key: &'static str, verdict: NodeResult) -> impl FnMut(f32, &mut (), &mut Blackboard) -> NodeResult {
        move |_dt, _ctx, bb| {
            let seen = bb.get_or_default::<i64>(key);
            bb.set(key, seen + 1);
            verdict
        }
    }

    fn updates(tree: &Tree<()>, key: &str) -> i64 {
        tree.blackboard().get_or_default::<i64>(key)
    }

    #[test]
    fn selector_tries_children_in_order_one_per_tick() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::selector("root")).unwrap();
        let a = tree
            .add_child(root, Node::leaf("a", counting("a", NodeResult::Failure)))
            .unwrap();
        let b = tree
            .add_child(root, Node::leaf("b", counting("b", NodeResult::Success)))
            .unwrap();
        let _c = tree
            .add_child(root, Node::leaf("c", counting("c", NodeResult::Success)))
            .unwrap();

        tree.tick(1.0, &mut ()); // root enters
        tree.tick(1.0, &mut ()); // a enters
        assert_eq!(tree.node(a).unwrap().status(), Status::Running);
        assert_eq!(updates(&tree, "a"), 0);

        tree.tick(1.0, &mut ()); // a updates and fails; cursor moves to b
        assert_eq!(updates(&tree, "a"), 1);
        assert!(tree.node(a).unwrap().has_failed());
        assert_eq!(tree.node(root).unwrap().status(), Status::Running);
        assert_eq!(updates(&tree, "b"), 0, "b is not ticked in a's frame");

        tree.tick(1.0, &mut ()); // b enters
        tree.tick(1.0, &mut ()); // b updates and succeeds; selector succeeds
        assert_eq!(updates(&tree, "b"), 1);
        assert!(tree.node(b).unwrap().has_succeeded());
        assert_eq!(tree.node(root).unwrap().status(), Status::Exiting);
        assert!(tree.node(root).unwrap().has_succeeded());
        assert_eq!(updates(&tree, "c"), 0, "children after the success never run");
    }

    #[test]
    fn selector_fails_only_after_last_child_fails() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::selector("root")).unwrap();
        for key in ["a", "b"] {
            tree.add_child(root, Node::leaf(key, counting(key, NodeResult::Failure)))
                .unwrap();
        }

        tree.tick(1.0, &mut ()); // root enters
        tree.tick(1.0, &mut ()); // a enters
        tree.tick(1.0, &mut ()); // a fails, cursor -> 1
        assert_eq!(tree.node(root).unwrap().result(), NodeResult::InProgress);

        tree.tick(1.0, &mut ()); // b enters
        tree.tick(1.0, &mut ()); // b fails, list exhausted
        assert!(tree.node(root).unwrap().has_failed());
        assert_eq!(updates(&tree, "a"), 1);
        assert_eq!(updates(&tree, "b"), 1);
    }

    #[test]
    fn empty_selector_fails_immediately() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::selector("root")).unwrap();

        tree.tick(1.0, &mut ()); // enter
        tree.tick(1.0, &mut ()); // update: nothing to try
        let node = tree.node(root).unwrap();
        assert_eq!(node.status(), Status::Exiting);
        assert!(node.has_failed());
    }

    #[test]
    fn sequencer_runs_children_in_order_until_all_succeed() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::sequencer("root")).unwrap();
        for key in ["a", "b"] {
            tree.add_child(root, Node::leaf(key, counting(key, NodeResult::Success)))
                .unwrap();
        }

        tree.tick(1.0, &mut ()); // root enters
        tree.tick(1.0, &mut ()); // a enters
        tree.tick(1.0, &mut ()); // a succeeds, cursor -> 1
        assert_eq!(tree.node(root).unwrap().status(), Status::Running);
        assert_eq!(updates(&tree, "b"), 0, "b is not ticked in a's frame");

        tree.tick(1.0, &mut ()); // b enters
        tree.tick(1.0, &mut ()); // b succeeds, end of list
        let node = tree.node(root).unwrap();
        assert_eq!(node.status(), Status::Exiting);
        assert!(node.has_succeeded());
        assert_eq!(updates(&tree, "a"), 1);
        assert_eq!(updates(&tree, "b"), 1);
    }

    #[test]
    fn sequencer_advances_past_success_then_fails_on_failing_child() {
        // Two-leaf sequencer: the first leaf succeeds on its first update,
        // the second fails on its first update.
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::sequencer("root")).unwrap();
        let leaf0 = tree
            .add_child(root, Node::leaf("leaf0", counting("leaf0", NodeResult::Success)))
            .unwrap();
        let leaf1 = tree
            .add_child(root, Node::leaf("leaf1", counting("leaf1", NodeResult::Failure)))
            .unwrap();

        tree.tick(1.0, &mut ()); // root enters
        tree.tick(1.0, &mut ()); // leaf0 enters
        assert_eq!(tree.node(leaf0).unwrap().status(), Status::Running);

        // leaf0 decides: Running -> Exiting, and the sequencer advances its
        // cursor without changing its own status.
        tree.tick(1.0, &mut ());
        assert_eq!(tree.node(leaf0).unwrap().status(), Status::Exiting);
        assert!(tree.node(leaf0).unwrap().has_succeeded());
        assert_eq!(tree.node(root).unwrap().status(), Status::Running);
        assert_eq!(tree.node(root).unwrap().result(), NodeResult::InProgress);

        tree.tick(1.0, &mut ()); // leaf1 enters
        tree.tick(1.0, &mut ()); // leaf1 fails; the sequencer fails with it
        assert!(tree.node(leaf1).unwrap().has_failed());
        assert!(tree.node(root).unwrap().has_failed());
        assert_eq!(tree.node(root).unwrap().status(), Status::Exiting);
    }

    #[test]
    fn empty_sequencer_succeeds_immediately() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::sequencer("root")).unwrap();

        tree.tick(1.0, &mut ()); // enter
        tree.tick(1.0, &mut ()); // update: cursor already at the end
        let node = tree.node(root).unwrap();
        assert_eq!(node.status(), Status::Exiting);
        assert!(node.has_succeeded());
    }

    #[test]
    fn running_child_keeps_composite_running() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::sequencer("root")).unwrap();
        let slow = tree
            .add_child(
                root,
                Node::leaf("slow", |_dt: f32, _ctx: &mut (), _bb: &mut Blackboard| {
                    NodeResult::InProgress
                }),
            )
            .unwrap();

        for _ in 0..10 {
            tree.tick(1.0, &mut ());
        }
        assert_eq!(tree.node(slow).unwrap().status(), Status::Running);
        assert_eq!(tree.node(root).unwrap().status(), Status::Running);
        assert_eq!(tree.node(root).unwrap().result(), NodeResult::InProgress);
    }
}
