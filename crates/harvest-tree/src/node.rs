//! Thin node header and index types.
//!
//! A node is a small fixed-size header; everything variable-length (the
//! child list) lives out-of-line in the arena's child pool, referenced by
//! a `NodeList` range. Traversal-heavy passes touch only the headers.

use crate::interner::Atom;
use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};

/// Index of a node in its `NodeArena`.
///
/// Node identity is index equality: two nodes are the same node iff they
/// occupy the same arena slot. An index is only meaningful together with
/// the arena it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node".
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A contiguous run of child indices in the arena's child pool.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct NodeList {
    pub start: u32,
    pub len: u32,
}

impl NodeList {
    pub const EMPTY: NodeList = NodeList { start: 0, len: 0 };

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// A thin node header.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Declared or referenced name; `Atom::NONE` for anonymous nodes.
    pub name: Atom,
    /// Parent node; `NodeIndex::NONE` for the root.
    pub parent: NodeIndex,
    /// Children, in syntactic order.
    pub children: NodeList,
}
