//! Decorator update algorithm: the repeat-style single-child wrapper.

use crate::node::{Behaviour, NodeId};
use crate::status::{NodeResult, Status};
use crate::tree::Tree;

/// Success count at which `RepeatUnlimited` would stop looping. The counter
/// is never advanced, so this bound is unreachable through normal ticking;
/// the node repeats its child indefinitely, as the name says.
const REPEAT_BOUND: u32 = 4;

impl<C> Tree<C> {
    /// Repeat: tick the single wrapped child every update.
    ///
    /// - Child success: the counter (which never moves) is checked against
    ///   the bound; short of it, the child's status is reset to `Ready` and
    ///   the loop continues. A bounded variant would increment the counter
    ///   here.
    /// - Child failure: every descendant's status is forced back to `Ready`
    ///   and its result to `Success` (swallow the failure, leave the subtree
    ///   clean for the next entry), and the decorator itself reports failure
    ///   to its own parent. The subtree reset and the decorator's own result
    ///   are deliberately independent.
    ///
    /// A decorator without a child fails immediately.
    pub(crate) fn update_repeat(&mut self, id: NodeId, dt: f32, ctx: &mut C) {
        let (child, counter) = {
            let Some(node) = self.node(id) else { return };
            let counter = match node.behaviour {
                Behaviour::Repeat { counter } => counter,
                _ => return,
            };
            (node.children().first().copied(), counter)
        };
        let Some(child) = child else {
            tracing::debug!(id = id.0, "repeat decorator has no child, failing");
            self.on_failure(id);
            return;
        };

        self.tick_node(child, dt, ctx);

        let Some(child_node) = self.node(child) else {
            return;
        };
        if child_node.has_succeeded() {
            if counter == REPEAT_BOUND {
                self.on_success(id);
            } else {
                // Restart the child; its own enter pass resets its result
                // and subtree, so no stale Success leaks into the next cycle.
                self.set_status(child, Status::Ready);
            }
        } else if child_node.has_failed() {
            self.set_status_children(id, Status::Ready);
            self.set_result_children(id, NodeResult::Success);
            self.on_failure(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::blackboard::Blackboard;
    use crate::node::Node;
    use crate::status::{NodeResult, Status};
    use crate::tree::Tree;

    fn counting(key: &'static str, verdict: NodeResult) -> impl FnMut(f32, &mut (), &mut Blackboard) -> NodeResult {
        move |_dt, _ctx, bb| {
            let seen = bb.get_or_default::<i64>(key);
            bb.set(key, seen + 1);
            verdict
        }
    }

    #[test]
    fn repeat_restarts_a_succeeding_child_forever() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::repeat("loop")).unwrap();
        let child = tree
            .add_child(root, Node::leaf("work", counting("work", NodeResult::Success)))
            .unwrap();

        // Each cycle after entry is two frames: the child re-enters, then
        // decides. Run far past four cycles; the decorator must still be
        // looping because its counter never advances.
        for _ in 0..30 {
            tree.tick(1.0, &mut ());
        }

        let completions = tree.blackboard().get_or_default::<i64>("work");
        assert!(completions > 4, "child completed {completions} times");
        assert_eq!(tree.node(root).unwrap().status(), Status::Running);
        assert_eq!(tree.node(root).unwrap().result(), NodeResult::InProgress);
        assert!(!tree.node(child).unwrap().status().is_suspended());
    }

    #[test]
    fn repeat_resets_child_to_ready_between_cycles() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::repeat("loop")).unwrap();
        let child = tree
            .add_child(root, Node::leaf("work", counting("work", NodeResult::Success)))
            .unwrap();

        tree.tick(1.0, &mut ()); // root enters
        tree.tick(1.0, &mut ()); // child enters
        tree.tick(1.0, &mut ()); // child succeeds; repeat re-arms it
        assert_eq!(tree.node(child).unwrap().status(), Status::Ready);
        assert_eq!(tree.node(root).unwrap().status(), Status::Running);

        tree.tick(1.0, &mut ()); // child enters again with a fresh result
        assert_eq!(tree.node(child).unwrap().status(), Status::Running);
        assert_eq!(tree.node(child).unwrap().result(), NodeResult::InProgress);
    }

    #[test]
    fn repeat_swallows_child_failure_and_fails_itself() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::repeat("loop")).unwrap();
        let seq = tree.add_child(root, Node::sequencer("steps")).unwrap();
        let step = tree
            .add_child(seq, Node::leaf("step", counting("step", NodeResult::Failure)))
            .unwrap();

        tree.tick(1.0, &mut ()); // root enters
        tree.tick(1.0, &mut ()); // seq enters
        tree.tick(1.0, &mut ()); // step enters
        // step fails; the failure cascades up through seq to the repeat
        // within this same frame
        tree.tick(1.0, &mut ());

        // The decorator's own verdict is failure...
        let root_node = tree.node(root).unwrap();
        assert_eq!(root_node.status(), Status::Exiting);
        assert!(root_node.has_failed());

        // ...while the subtree is force-reset to Ready/Success underneath it.
        for id in [seq, step] {
            let node = tree.node(id).unwrap();
            assert_eq!(node.status(), Status::Ready);
            assert_eq!(node.result(), NodeResult::Success);
        }
    }

    #[test]
    fn childless_repeat_fails_defensively() {
        let mut tree: Tree<()> = Tree::new("t");
        let root = tree.set_root(Node::repeat("loop")).unwrap();

        tree.tick(1.0, &mut ()); // enter
        tree.tick(1.0, &mut ()); // update: nothing to wrap
        assert!(tree.node(root).unwrap().has_failed());
    }
}
