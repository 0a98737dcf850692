//! Semantic data supplied by the compiler frontend.
//!
//! The rewriter never computes symbols or types itself. It reads them through
//! the [`SemanticModel`] trait, which mirrors the four questions a frontend can
//! answer about a syntax node (type info, bound symbol, member group,
//! operation) plus lookups into the symbol, type and operation tables those
//! answers point into.
//!
//! [`SemanticTable`] is a plain in-memory implementation, populated through
//! [`SemanticTableBuilder`], for frontends that materialise their model up
//! front (and for tests).

pub mod model;
pub mod operation;
pub mod symbol;
pub mod table;
pub mod types;

pub use model::{SemanticModel, TypeInfo};
pub use operation::{OperationData, OperationId, OperationKind};
pub use symbol::{Symbol, SymbolId, SymbolKind};
pub use table::{SemanticTable, SemanticTableBuilder};
pub use types::{SpecialType, TypeData, TypeId, TypeKind};

#[cfg(test)]
#[path = "../tests/semantic_table_tests.rs"]
mod semantic_table_tests;
