//! Syntax tree model for harvest.
//!
//! Trees are stored in a [`NodeArena`]: nodes are small headers referenced
//! by [`NodeIndex`], children live out-of-line in a shared pool, and names
//! are interned [`Atom`]s. Node identity is index equality — two nodes are
//! the same node iff they occupy the same arena slot, never because they
//! are structurally equal.
//!
//! The arena is append-only. Trees are built bottom-up through the `add_*`
//! constructors (children first, then the parent that adopts them); once
//! built, nothing in this workspace mutates or frees a node.

pub mod arena;
pub mod interner;
pub mod kind;
pub mod node;

pub use arena::NodeArena;
pub use interner::{Atom, Interner};
pub use kind::NodeKind;
pub use node::{Node, NodeIndex, NodeList};
