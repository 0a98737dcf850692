//! Symbols: resolved program entities.

use crate::types::TypeId;
use serde::Serialize;

/// Index of a symbol in the model's symbol table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SymbolId(pub u32);

/// What kind of entity a symbol names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolKind {
    /// `_` in a deconstruction or out-argument.
    Discard,
    Event,
    Field,
    Local,
    /// Methods, constructors, operators, local functions and lambdas.
    Method,
    Parameter,
    Property,
    TypeParameter,
    Namespace,
    NamedType,
    /// Any other member kind the frontend reports.
    Member,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Declared type of a field/local/parameter/property/event, return type of
    /// a method.
    pub value_type: Option<TypeId>,
    /// Enclosing namespace, type or method. `None` for the global namespace.
    pub containing: Option<SymbolId>,
}

impl Symbol {
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        value_type: Option<TypeId>,
        containing: Option<SymbolId>,
    ) -> Self {
        Symbol {
            name: name.into(),
            kind,
            value_type,
            containing,
        }
    }
}
