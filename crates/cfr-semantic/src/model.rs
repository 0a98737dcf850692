//! The semantic-model interface.

use crate::operation::{OperationData, OperationId};
use crate::symbol::{Symbol, SymbolId};
use crate::types::{TypeData, TypeId};
use cfr_syntax::NodeIndex;

/// Static type of an expression before and after implicit conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeInfo {
    pub declared: Option<TypeId>,
    /// Type after any implicit conversion the context applies.
    pub converted: Option<TypeId>,
}

impl TypeInfo {
    pub const fn new(declared: Option<TypeId>, converted: Option<TypeId>) -> Self {
        TypeInfo {
            declared,
            converted,
        }
    }

    /// Same declared and converted type (no implicit conversion).
    pub const fn unconverted(ty: TypeId) -> Self {
        TypeInfo {
            declared: Some(ty),
            converted: Some(ty),
        }
    }
}

/// Semantic information for one syntax tree, supplied by the frontend.
///
/// Implementations must be safe for concurrent reads; the query layer holds
/// no locks of its own.
pub trait SemanticModel: Send + Sync {
    /// Declared and converted type of an expression or type-syntax node.
    fn type_info(&self, node: NodeIndex) -> TypeInfo;

    /// Operation bound to `node`, if the frontend modelled one.
    fn operation(&self, node: NodeIndex) -> Option<OperationId>;

    /// The single symbol `node` binds to.
    fn symbol_info(&self, node: NodeIndex) -> Option<SymbolId>;

    /// Overload candidates for a method-group expression, in the frontend's
    /// order.
    fn member_group(&self, node: NodeIndex) -> &[SymbolId];

    /// The `object` type, used when an operation reports no type.
    fn object_type(&self) -> TypeId;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    fn type_data(&self, id: TypeId) -> Option<&TypeData>;

    fn operation_data(&self, id: OperationId) -> Option<&OperationData>;
}
