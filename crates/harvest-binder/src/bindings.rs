//! Resolution targets and the bindings table.

use bitflags::bitflags;
use harvest_tree::{NodeIndex, NodeKind};
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

/// The four declaration kinds a name reference may resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeclKind {
    Class,
    Object,
    Property,
    Function,
}

impl DeclKind {
    /// Classify a node kind, if it is a declaration.
    pub fn of(kind: NodeKind) -> Option<DeclKind> {
        match kind {
            NodeKind::ClassDecl => Some(DeclKind::Class),
            NodeKind::ObjectDecl => Some(DeclKind::Object),
            NodeKind::PropertyDecl => Some(DeclKind::Property),
            NodeKind::FunctionDecl => Some(DeclKind::Function),
            _ => None,
        }
    }
}

bitflags! {
    /// A set of declaration kinds, used to filter resolution targets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DeclKindSet: u8 {
        const CLASS = 1 << 0;
        const OBJECT = 1 << 1;
        const PROPERTY = 1 << 2;
        const FUNCTION = 1 << 3;
    }
}

impl DeclKindSet {
    pub const ALL: DeclKindSet = DeclKindSet::all();
}

impl From<DeclKind> for DeclKindSet {
    fn from(kind: DeclKind) -> DeclKindSet {
        match kind {
            DeclKind::Class => DeclKindSet::CLASS,
            DeclKind::Object => DeclKindSet::OBJECT,
            DeclKind::Property => DeclKindSet::PROPERTY,
            DeclKind::Function => DeclKindSet::FUNCTION,
        }
    }
}

/// A resolved declaration target.
///
/// `node` is the declaration's originating node in the tree, or
/// `NodeIndex::NONE` for symbols declared outside it (library or compiled
/// dependencies). External targets are legal and simply carry no node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Target {
    pub kind: DeclKind,
    pub node: NodeIndex,
}

impl Target {
    pub fn new(kind: DeclKind, node: NodeIndex) -> Target {
        Target { kind, node }
    }

    /// An external declaration with no in-tree node.
    pub fn external(kind: DeclKind) -> Target {
        Target {
            kind,
            node: NodeIndex::NONE,
        }
    }

    #[inline]
    pub fn is_in_tree(&self) -> bool {
        self.node.is_some()
    }
}

/// Targets of one reference. Almost always a single declaration.
pub type TargetList = SmallVec<[Target; 1]>;

/// Read-only map from `NameRef` nodes to their resolved declarations.
///
/// Treated as an immutable snapshot for the duration of a traversal. An
/// unresolved reference has no entry: `resolve_targets` returns an empty
/// slice, never an error.
#[derive(Debug, Default)]
pub struct Bindings {
    targets: FxHashMap<NodeIndex, TargetList>,
}

impl Bindings {
    pub fn new() -> Bindings {
        Bindings::default()
    }

    /// Targets of a name reference, in resolution order.
    pub fn resolve_targets(&self, reference: NodeIndex) -> &[Target] {
        self.targets
            .get(&reference)
            .map_or(&[], |list| list.as_slice())
    }

    /// Record one target for a reference. This is the manual construction
    /// path for embedders that bring their own resolver.
    pub fn insert_target(&mut self, reference: NodeIndex, target: Target) {
        self.targets.entry(reference).or_default().push(target);
    }

    pub(crate) fn insert_all(&mut self, reference: NodeIndex, list: TargetList) {
        self.targets.insert(reference, list);
    }

    /// Number of references with at least one target.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
