//! Cancellable iterative tree walk with reference expansion.
//!
//! `visit` walks a subtree depth-first without call-stack recursion, so
//! arbitrarily deep trees cannot overflow the stack. When it reaches a
//! `NameRef` it also descends into the in-tree declarations the reference
//! resolves to, which makes the walk follow the same graph the closure
//! computes over — including cycles, which are cut by the ancestor path.
//!
//! Each node on the work stack moves through four states: Pending
//! (pushed), Visiting (popped, callback runs), Descended (children and
//! reference targets pushed, node held open on the ancestor path until
//! its `Exit` frame resurfaces), Retired (popped off the path). A callback
//! returning `false` skips the Descended step entirely, pruning the
//! subtree and any reference expansion reachable only through it.

use harvest_binder::Bindings;
use harvest_tree::{NodeArena, NodeIndex, NodeKind};
use rustc_hash::FxHashSet;

/// The open chain of nodes currently being descended into.
///
/// Never contains a duplicate: a node that is reached again while still
/// open is not re-entered. Iteration is nearest-first.
#[derive(Debug, Default)]
pub struct AncestorPath {
    open: Vec<NodeIndex>,
    members: FxHashSet<NodeIndex>,
}

impl AncestorPath {
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.members.contains(&node)
    }

    /// Open ancestors, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.open.iter().rev().copied()
    }

    /// The innermost open ancestor.
    pub fn nearest(&self) -> Option<NodeIndex> {
        self.open.last().copied()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    fn push(&mut self, node: NodeIndex) {
        debug_assert!(!self.members.contains(&node), "ancestor path duplicate");
        self.open.push(node);
        self.members.insert(node);
    }

    fn pop(&mut self) {
        if let Some(node) = self.open.pop() {
            self.members.remove(&node);
        }
    }
}

/// Work stack frames. A node is pushed as `Enter` (Pending) and, once
/// descended, an `Exit` frame marks where it retires from the path.
enum Frame {
    Enter(NodeIndex),
    Exit(NodeIndex),
}

/// Depth-first visit of `root`'s subtree plus the reference targets
/// reachable from it.
///
/// `body` receives each node together with the current ancestor path and
/// decides whether to descend: `true` visits the node's children (and,
/// for a `NameRef`, its in-tree resolution targets); `false` prunes the
/// node entirely. A node reached again while it is still an open ancestor
/// gets its callback invoked but is not descended a second time, so
/// reference cycles terminate.
pub fn visit(
    arena: &NodeArena,
    bindings: &Bindings,
    root: NodeIndex,
    mut body: impl FnMut(NodeIndex, &AncestorPath) -> bool,
) {
    let mut work = vec![Frame::Enter(root)];
    let mut path = AncestorPath::default();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Exit(node) => {
                debug_assert_eq!(path.nearest(), Some(node), "unbalanced exit frame");
                path.pop();
            }
            Frame::Enter(node) => {
                if arena.get(node).is_none() {
                    continue;
                }
                let descend = body(node, &path);
                if !descend || path.contains(node) {
                    // Pruned, or re-entered while still open.
                    continue;
                }
                work.push(Frame::Exit(node));
                path.push(node);
                // Children pushed in reverse so they pop in syntactic
                // order; reference targets are pushed last and therefore
                // pop first.
                for &child in arena.children(node).iter().rev() {
                    work.push(Frame::Enter(child));
                }
                if arena.kind(node) == Some(NodeKind::NameRef) {
                    for target in bindings.resolve_targets(node).iter().rev() {
                        if target.is_in_tree() {
                            work.push(Frame::Enter(target.node));
                        }
                    }
                }
            }
        }
    }
}
