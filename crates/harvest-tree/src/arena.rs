//! Arena-based storage for syntax trees.
//!
//! Nodes are stored contiguously and referenced by `NodeIndex`. The arena
//! is append-only and build order is bottom-up: a node's children must
//! exist before the node that adopts them, and every non-root node is
//! adopted exactly once. Parent links are maintained here, so consumers
//! can walk both directions without auxiliary maps.

use crate::interner::{Atom, Interner};
use crate::kind::NodeKind;
use crate::node::{Node, NodeIndex, NodeList};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
    child_pool: Vec<NodeIndex>,
    #[serde(skip)]
    interner: Interner,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            child_pool: Vec::with_capacity(capacity),
            interner: Interner::default(),
        }
    }

    /// Intern a name for use with the `add_*` constructors.
    pub fn intern(&mut self, text: &str) -> Atom {
        self.interner.intern(text)
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    fn add(&mut self, kind: NodeKind, name: Atom, children: &[NodeIndex]) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let list = if children.is_empty() {
            NodeList::EMPTY
        } else {
            let start = self.child_pool.len() as u32;
            self.child_pool.extend_from_slice(children);
            NodeList {
                start,
                len: children.len() as u32,
            }
        };
        self.nodes.push(Node {
            kind,
            name,
            parent: NodeIndex::NONE,
            children: list,
        });
        for &child in children {
            debug_assert!(
                self.nodes[child.0 as usize].parent.is_none(),
                "node {child:?} adopted twice"
            );
            self.nodes[child.0 as usize].parent = index;
        }
        index
    }

    // Constructors. Children-first: build the subtree, then the parent.

    pub fn add_source_unit(&mut self, children: &[NodeIndex]) -> NodeIndex {
        self.add(NodeKind::SourceUnit, Atom::NONE, children)
    }

    pub fn add_class(&mut self, name: Atom, members: &[NodeIndex]) -> NodeIndex {
        self.add(NodeKind::ClassDecl, name, members)
    }

    pub fn add_object(&mut self, name: Atom, members: &[NodeIndex]) -> NodeIndex {
        self.add(NodeKind::ObjectDecl, name, members)
    }

    pub fn add_property(&mut self, name: Atom, initializer: &[NodeIndex]) -> NodeIndex {
        self.add(NodeKind::PropertyDecl, name, initializer)
    }

    pub fn add_function(&mut self, name: Atom, body: &[NodeIndex]) -> NodeIndex {
        self.add(NodeKind::FunctionDecl, name, body)
    }

    pub fn add_block(&mut self, expressions: &[NodeIndex]) -> NodeIndex {
        self.add(NodeKind::Block, Atom::NONE, expressions)
    }

    /// Call expression: callee first, then arguments.
    pub fn add_call(&mut self, callee: NodeIndex, arguments: &[NodeIndex]) -> NodeIndex {
        let mut children = Vec::with_capacity(arguments.len() + 1);
        children.push(callee);
        children.extend_from_slice(arguments);
        self.add(NodeKind::Call, Atom::NONE, &children)
    }

    /// Receiver-qualified selection: `receiver.selected`.
    pub fn add_field_access(&mut self, receiver: NodeIndex, selected: NodeIndex) -> NodeIndex {
        self.add(NodeKind::FieldAccess, Atom::NONE, &[receiver, selected])
    }

    pub fn add_name_ref(&mut self, name: Atom) -> NodeIndex {
        self.add(NodeKind::NameRef, name, &[])
    }

    pub fn add_binary(&mut self, lhs: NodeIndex, rhs: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Binary, Atom::NONE, &[lhs, rhs])
    }

    pub fn add_literal(&mut self) -> NodeIndex {
        self.add(NodeKind::Literal, Atom::NONE, &[])
    }

    // Accessors.

    /// Get a node by index.
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn kind(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(|node| node.kind)
    }

    pub fn name(&self, index: NodeIndex) -> Atom {
        self.get(index).map(|node| node.name).unwrap_or(Atom::NONE)
    }

    /// Resolve a node's name to its text; `None` for anonymous nodes.
    pub fn name_text(&self, index: NodeIndex) -> Option<&str> {
        let atom = self.name(index);
        if atom.is_none() {
            None
        } else {
            Some(self.interner.resolve(atom))
        }
    }

    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index)
            .map(|node| node.parent)
            .unwrap_or(NodeIndex::NONE)
    }

    /// Children of a node, in syntactic order. Empty for leaves and for
    /// `NodeIndex::NONE`.
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        match self.get(index) {
            Some(node) if !node.children.is_empty() => {
                let start = node.children.start as usize;
                &self.child_pool[start..start + node.children.len as usize]
            }
            _ => &[],
        }
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Representative expression view of a function declaration: the parent
    /// `FieldAccess` when the declaration is that parent's selector child,
    /// otherwise the declaration itself. Non-function nodes are their own
    /// representative. Overloads are distinct nodes and each gets its own
    /// structural representative; there is no name-based merging.
    pub fn receiver_qualified_or_self(&self, index: NodeIndex) -> NodeIndex {
        if self.kind(index) != Some(NodeKind::FunctionDecl) {
            return index;
        }
        let parent = self.parent(index);
        if self.kind(parent) == Some(NodeKind::FieldAccess)
            && self.children(parent).get(1) == Some(&index)
        {
            parent
        } else {
            index
        }
    }
}
