//! Node records and per-kind node data.
//!
//! A [`Node`] is a thin record (kind, span, index into a data pool). The data
//! pool a node points into is determined by its kind; see `node_access` for
//! the typed getters.

use crate::base::{NodeIndex, NodeList};
use crate::syntax_kind::{ModifierList, PredefinedKeyword, SyntaxKind};
use cfr_common::Span;

/// Thin node record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: SyntaxKind,
    pub span: Span,
    /// Index into the data pool for `kind`, or `Node::NO_DATA`.
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub const fn with_data(kind: SyntaxKind, span: Span, data_index: u32) -> Self {
        Node {
            kind,
            span,
            data_index,
        }
    }

    #[inline]
    pub const fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }
}

/// Per-node information maintained alongside the thin record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ExtendedNodeInfo {
    /// Syntactic parent, `NodeIndex::NONE` for roots.
    pub parent: NodeIndex,
}

// =============================================================================
// Names and type syntax
// =============================================================================

/// `Foo`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// `Foo<int, T>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericNameData {
    pub identifier: String,
    pub type_arguments: NodeList,
}

/// `A.B` (QualifiedName) or `global::A` (AliasQualifiedName).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// `void`, `int`, `string`, ...
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredefinedTypeData {
    pub keyword: PredefinedKeyword,
}

/// `T?`, `T[]`, `T*`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrappedTypeData {
    pub element_type: NodeIndex,
}

// =============================================================================
// Expressions
// =============================================================================

/// `(e)`, `await e`, `checked(e)`, `unchecked(e)`, `ref e`, `throw e`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrappedExprData {
    pub expression: NodeIndex,
}

/// `expression.name`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    /// Identifier or generic name.
    pub name: NodeIndex,
}

/// `expression(arguments)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationData {
    pub expression: NodeIndex,
    pub arguments: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: String,
    pub right: NodeIndex,
}

// =============================================================================
// Function-like declarations
// =============================================================================

/// Methods, constructors, destructors, operators, conversion operators and
/// local functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodLikeData {
    pub modifiers: ModifierList,
    /// `NONE` for constructors and destructors.
    pub return_type: NodeIndex,
    pub name: NodeIndex,
    pub parameters: NodeIndex,
    pub body: NodeIndex,
    /// `ArrowExpressionClause`.
    pub expression_body: NodeIndex,
}

/// Simple lambdas, parenthesized lambdas and anonymous methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnonymousFunctionData {
    pub modifiers: ModifierList,
    /// Explicit return type of a parenthesized lambda, otherwise `NONE`.
    pub return_type: NodeIndex,
    /// The single parameter of a simple lambda (`x => ...`).
    pub parameter: NodeIndex,
    /// `ParameterList` of a parenthesized lambda or anonymous method.
    pub parameters: NodeIndex,
    pub body: NodeIndex,
    /// Expression of an expression-bodied lambda (not wrapped in an arrow clause).
    pub expression_body: NodeIndex,
}

/// `get`, `set`, `init`, `add`, `remove`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorData {
    pub modifiers: ModifierList,
    pub body: NodeIndex,
    /// `ArrowExpressionClause`.
    pub expression_body: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorListData {
    pub accessors: NodeList,
}

/// Properties, indexers and events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyLikeData {
    pub modifiers: ModifierList,
    pub type_annotation: NodeIndex,
    pub name: NodeIndex,
    /// Bracketed parameters of an indexer, otherwise `NONE`.
    pub parameters: NodeIndex,
    pub accessor_list: NodeIndex,
    /// `ArrowExpressionClause` of `int P => 1;`.
    pub expression_body: NodeIndex,
}

// =============================================================================
// Shared pieces
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterListData {
    pub parameters: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterData {
    pub modifiers: ModifierList,
    /// `NONE` for implicitly typed lambda parameters.
    pub type_annotation: NodeIndex,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockData {
    pub statements: NodeList,
}

/// `=> expression`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowClauseData {
    pub expression: NodeIndex,
}

// =============================================================================
// Arena
// =============================================================================

/// Flat store of nodes and their data pools.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,
    pub identifiers: Vec<IdentifierData>,
    pub generic_names: Vec<GenericNameData>,
    pub qualified_names: Vec<QualifiedNameData>,
    pub predefined_types: Vec<PredefinedTypeData>,
    pub wrapped_types: Vec<WrappedTypeData>,
    pub wrapped_exprs: Vec<WrappedExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub invocations: Vec<InvocationData>,
    pub literals: Vec<LiteralData>,
    pub binary_exprs: Vec<BinaryExprData>,
    pub method_likes: Vec<MethodLikeData>,
    pub anonymous_functions: Vec<AnonymousFunctionData>,
    pub accessors: Vec<AccessorData>,
    pub accessor_lists: Vec<AccessorListData>,
    pub property_likes: Vec<PropertyLikeData>,
    pub parameter_lists: Vec<ParameterListData>,
    pub parameters: Vec<ParameterData>,
    pub blocks: Vec<BlockData>,
    pub arrow_clauses: Vec<ArrowClauseData>,
}
