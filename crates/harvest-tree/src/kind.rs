//! Node kinds.

use serde::{Deserialize, Serialize};

/// The closed set of syntax node kinds this subsystem understands.
///
/// Declarations introduce a named symbol and own a subtree; expressions are
/// the value-shaped nodes the reachability closure collects; `SourceUnit`
/// is the tree root. The set is deliberately closed: kind checks are plain
/// enum matches, never runtime type inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of a tree. Not an expression, not a declaration.
    SourceUnit,
    /// Class declaration.
    ClassDecl,
    /// Singleton object declaration.
    ObjectDecl,
    /// Property declaration with an optional initializer subtree.
    PropertyDecl,
    /// Named function declaration with a body subtree.
    FunctionDecl,
    /// Brace-delimited expression sequence.
    Block,
    /// Call expression: callee first, then arguments.
    Call,
    /// Receiver-qualified selection: `receiver.selected`.
    FieldAccess,
    /// Use of a symbol by name.
    NameRef,
    /// Binary operator expression.
    Binary,
    /// Literal constant.
    Literal,
}

impl NodeKind {
    /// Expression-shaped nodes: everything the closure collects.
    #[inline]
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Block
                | NodeKind::Call
                | NodeKind::FieldAccess
                | NodeKind::NameRef
                | NodeKind::Binary
                | NodeKind::Literal
        )
    }

    /// Nodes that introduce a named symbol.
    #[inline]
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::ClassDecl
                | NodeKind::ObjectDecl
                | NodeKind::PropertyDecl
                | NodeKind::FunctionDecl
        )
    }

    #[inline]
    pub fn is_name_ref(self) -> bool {
        matches!(self, NodeKind::NameRef)
    }
}
