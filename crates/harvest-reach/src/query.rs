//! Subtree queries.
//!
//! [`collect_nodes`] is the generic "find all nodes matching a predicate"
//! primitive: iterative pre-order with an explicit stack, deterministic
//! document order (each node before its children, children in syntactic
//! order). The wrappers fix the two predicates the closure needs.

use harvest_tree::{NodeArena, NodeIndex, NodeKind};

/// All nodes in `root`'s subtree (root included) matching `predicate`,
/// in document order.
pub fn collect_nodes(
    arena: &NodeArena,
    root: NodeIndex,
    mut predicate: impl FnMut(&NodeArena, NodeIndex) -> bool,
) -> Vec<NodeIndex> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(index) = stack.pop() {
        if arena.get(index).is_none() {
            continue;
        }
        if predicate(arena, index) {
            found.push(index);
        }
        // Reverse so the first child pops first.
        for &child in arena.children(index).iter().rev() {
            stack.push(child);
        }
    }
    found
}

/// Expressions strictly below `root`, document order. The root itself is
/// excluded even when it is expression-shaped: callers that want it opt in
/// explicitly (see `gather_all_expressions`'s `include_self`).
pub fn expressions_in(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    collect_nodes(arena, root, |arena, index| {
        index != root && arena.kind(index).is_some_and(NodeKind::is_expression)
    })
}

/// Name references in `root`'s subtree, root included, document order.
/// Including the root lets a bare reference used as a start node still
/// pull in its declaration.
pub fn name_refs_in(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    collect_nodes(arena, root, |arena, index| {
        arena.kind(index) == Some(NodeKind::NameRef)
    })
}
