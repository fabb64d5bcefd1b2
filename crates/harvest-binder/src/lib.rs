//! Name binding for harvest trees.
//!
//! [`Bindings`] is the read-only resolution table the reachability core
//! consumes: a map from `NameRef` nodes to the declarations they resolve
//! to. It can be produced by the lexical [`bind`] pass in this crate, or
//! filled manually by an embedder that brings its own resolver.

pub mod binder;
pub mod bindings;

pub use binder::bind;
pub use bindings::{Bindings, DeclKind, DeclKindSet, Target, TargetList};
