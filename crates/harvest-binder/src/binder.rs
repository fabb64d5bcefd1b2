//! Lexical name binder.
//!
//! A single pass over a tree that declares symbols per lexical scope and
//! resolves every `NameRef` to the declarations it can see. Declarations
//! are hoisted within their scope, so a use may precede its declaration.
//! Nearer scopes shadow outer ones; several same-name declarations in one
//! scope all become targets (overload-style). A name with no visible
//! declaration gets no entry at all.
//!
//! Only declarations appearing directly in a scope-opening node's child
//! list introduce symbols; a declaration buried inside an expression is
//! not visible by name.

use crate::bindings::{Bindings, DeclKind, Target, TargetList};
use harvest_tree::{Atom, NodeArena, NodeIndex, NodeKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Kinds that open a lexical scope.
fn opens_scope(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::SourceUnit
            | NodeKind::ClassDecl
            | NodeKind::ObjectDecl
            | NodeKind::FunctionDecl
            | NodeKind::Block
    )
}

/// Bind `root`'s subtree, resolving every name reference in it.
pub fn bind(arena: &NodeArena, root: NodeIndex) -> Bindings {
    let mut binder = Binder {
        arena,
        scopes: Vec::new(),
        bindings: Bindings::new(),
    };
    binder.visit(root);
    binder.bindings
}

struct Binder<'a> {
    arena: &'a NodeArena,
    /// Innermost scope last.
    scopes: Vec<FxHashMap<Atom, TargetList>>,
    bindings: Bindings,
}

impl Binder<'_> {
    fn visit(&mut self, index: NodeIndex) {
        let Some(kind) = self.arena.kind(index) else {
            return;
        };
        if opens_scope(kind) {
            self.scopes.push(FxHashMap::default());
            // Hoist: declarations are visible to everything in their
            // scope, including uses that precede them.
            for &child in self.arena.children(index) {
                self.declare(child);
            }
            for &child in self.arena.children(index) {
                self.visit(child);
            }
            self.scopes.pop();
        } else {
            if kind == NodeKind::NameRef {
                self.resolve(index);
            }
            for &child in self.arena.children(index) {
                self.visit(child);
            }
        }
    }

    fn declare(&mut self, index: NodeIndex) {
        let Some(kind) = self.arena.kind(index) else {
            return;
        };
        let Some(decl) = DeclKind::of(kind) else {
            return;
        };
        let name = self.arena.name(index);
        if name.is_none() {
            return;
        }
        debug!(
            node = index.0,
            name = self.arena.name_text(index),
            kind = ?decl,
            "declare"
        );
        if let Some(scope) = self.scopes.last_mut() {
            scope
                .entry(name)
                .or_default()
                .push(Target::new(decl, index));
        }
    }

    fn resolve(&mut self, index: NodeIndex) {
        let name = self.arena.name(index);
        if name.is_none() {
            return;
        }
        // Nearest scope holding the name wins; all of its same-name
        // declarations become targets.
        for scope in self.scopes.iter().rev() {
            if let Some(list) = scope.get(&name) {
                debug!(
                    node = index.0,
                    name = self.arena.name_text(index),
                    targets = list.len(),
                    "resolve"
                );
                self.bindings.insert_all(index, list.clone());
                return;
            }
        }
        debug!(
            node = index.0,
            name = self.arena.name_text(index),
            "unresolved"
        );
    }
}
