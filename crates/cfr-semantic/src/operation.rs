//! Operations: the semantic shape of an expression.
//!
//! Reference operations carry exactly one target symbol. Indirection
//! operations wrap exactly one nested operation. Both sets are closed so that
//! the resolver's matches stay exhaustive.

use crate::symbol::SymbolId;
use crate::types::TypeId;
use cfr_syntax::NodeIndex;
use serde::Serialize;

/// Index of an operation in the model's operation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct OperationId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OperationKind {
    /// The frontend's "no operation" placeholder for syntax it does not model.
    None,

    // References
    AnonymousFunction { symbol: SymbolId },
    FieldReference { field: SymbolId },
    EventReference { event: SymbolId },
    LocalReference { local: SymbolId },
    LocalFunction { symbol: SymbolId },
    Invocation { target_method: SymbolId },
    /// Member references not covered by the specific variants above.
    MemberReference { member: SymbolId },
    MethodReference { method: SymbolId },
    ParameterReference { parameter: SymbolId },
    PropertyReference { property: SymbolId },

    // Indirections
    AddressOf { reference: OperationId },
    ArrayElementReference { array_reference: OperationId },
    Conversion { operand: OperationId },
    DelegateCreation { target: OperationId },
    Unary { operand: OperationId },
    DynamicIndexerAccess { operation: OperationId },

    // Everything else
    Literal,
    Binary { left: OperationId, right: OperationId },
}

impl OperationKind {
    /// The single operation wrapped by an indirection, `None` for every other
    /// variant.
    #[inline]
    pub const fn wrapped_operation(&self) -> Option<OperationId> {
        match *self {
            OperationKind::AddressOf { reference } => Some(reference),
            OperationKind::ArrayElementReference { array_reference } => Some(array_reference),
            OperationKind::Conversion { operand } => Some(operand),
            OperationKind::DelegateCreation { target } => Some(target),
            OperationKind::Unary { operand } => Some(operand),
            OperationKind::DynamicIndexerAccess { operation } => Some(operation),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_none_sentinel(&self) -> bool {
        matches!(self, OperationKind::None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OperationData {
    pub kind: OperationKind,
    /// Result type, if the frontend reports one.
    pub ty: Option<TypeId>,
    /// Syntax the operation was bound from.
    pub syntax: NodeIndex,
}
