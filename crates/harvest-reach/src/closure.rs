//! Transitive reachable-expression closure.
//!
//! `gather_all_expressions` answers: starting from one node, which nodes
//! does this code depend on? The answer is its own sub-expressions, the
//! in-tree declarations of every symbol it references, and, recursively,
//! everything those depend on — a closure over the graph the tree becomes
//! once name references are followed.
//!
//! The computation is a worklist fixpoint: a queue of nodes still to
//! expand plus one monotonically growing expanded set owned by the
//! top-level call. Each node is expanded at most once, so mutual
//! recursion between declarations (A references B, B references A) makes
//! the worklist drain rather than loop. There is no error path anywhere:
//! unresolved references, external declarations, and reference cycles all
//! degrade to silent omission.

use harvest_binder::{Bindings, DeclKindSet};
use harvest_tree::{NodeArena, NodeIndex, NodeKind};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::query::{expressions_in, name_refs_in};

/// In-tree declarations referenced from `root`'s subtree, filtered by
/// kind. Targets with no originating node (external symbols) and targets
/// outside `kinds` contribute nothing. Order follows the references'
/// document order; duplicates are kept (callers dedupe via sets).
pub fn referenced_declarations(
    arena: &NodeArena,
    bindings: &Bindings,
    root: NodeIndex,
    kinds: DeclKindSet,
) -> Vec<NodeIndex> {
    let mut found = Vec::new();
    for reference in name_refs_in(arena, root) {
        for target in bindings.resolve_targets(reference) {
            if target.is_in_tree() && kinds.contains(target.kind.into()) {
                found.push(target.node);
            }
        }
    }
    found
}

/// Gather every node reachable from `start`: sub-expressions, referenced
/// in-tree declarations, and their transitive dependencies, as one flat
/// identity set.
///
/// `already_got` is the caller's account of nodes whose dependencies are
/// already covered: they are never expanded here, but still appear in the
/// result when something reachable discovers them. Pass an empty set for
/// a fresh computation.
///
/// `include_self` puts `start` itself in the result. With it off, `start`
/// only appears if rediscovered through some reference path (or via the
/// function-representative rule below).
///
/// A `FunctionDecl` being expanded also contributes its representative
/// expression view — the receiver-qualified parent when it is a selector,
/// otherwise the declaration itself (`NodeArena::receiver_qualified_or_self`).
///
/// For a fixed `(arena, bindings)` snapshot the result is deterministic
/// and idempotent, and the call always terminates: the expanded set grows
/// monotonically and the arena is finite.
pub fn gather_all_expressions(
    arena: &NodeArena,
    bindings: &Bindings,
    start: NodeIndex,
    already_got: &FxHashSet<NodeIndex>,
    include_self: bool,
) -> FxHashSet<NodeIndex> {
    let mut result = FxHashSet::default();
    let mut expanded = already_got.clone();
    let mut worklist = vec![start];
    expanded.insert(start);

    if include_self {
        result.insert(start);
    }

    while let Some(node) = worklist.pop() {
        let discovered = expand(arena, bindings, node);
        debug!(node = node.0, discovered = discovered.len(), "expand");
        for found in discovered {
            result.insert(found);
            if expanded.insert(found) {
                worklist.push(found);
            }
        }
    }

    result
}

/// One node's direct discoveries: its sub-expressions, the in-tree
/// declarations its subtree references, and, for a function declaration,
/// its representative expression view.
fn expand(arena: &NodeArena, bindings: &Bindings, node: NodeIndex) -> Vec<NodeIndex> {
    let mut discovered = expressions_in(arena, node);
    discovered.extend(referenced_declarations(
        arena,
        bindings,
        node,
        DeclKindSet::ALL,
    ));
    if arena.kind(node) == Some(NodeKind::FunctionDecl) {
        discovered.push(arena.receiver_qualified_or_self(node));
    }
    discovered
}
