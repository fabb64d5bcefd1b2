//! Reachability over resolved syntax trees.
//!
//! Given a start node and a [`harvest_binder::Bindings`] table, this crate
//! computes which nodes a piece of code depends on. The tree is strictly
//! tree-shaped, but following name references into their declarations
//! turns it into a graph, possibly a cyclic one; everything here is built
//! to terminate and to avoid duplicate work on such graphs.
//!
//! Three layers:
//!
//! - [`query`]: find all nodes matching a predicate in a subtree, in
//!   deterministic document order.
//! - [`closure`]: the transitive reachable-expression closure — a node's
//!   sub-expressions plus the declarations of every symbol referenced from
//!   it, recursively, as a flat identity set.
//! - [`walker`]: a cancellable iterative depth-first visit that follows
//!   reference edges and exposes the open ancestor chain to its callback.
//!
//! All of it is single-threaded and synchronous; the arena and bindings
//! are immutable snapshots for the duration of a call.

pub mod closure;
pub mod query;
pub mod walker;

pub use closure::{gather_all_expressions, referenced_declarations};
pub use query::{collect_nodes, expressions_in, name_refs_in};
pub use walker::{AncestorPath, visit};
