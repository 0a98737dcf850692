//! Type references.

use crate::symbol::SymbolId;
use serde::Serialize;

/// Index of a type in the model's type table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

/// Types the language gives special meaning to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialType {
    #[default]
    None,
    /// `void`: the absent-value type.
    Void,
    /// `object`: the root of the type hierarchy.
    Object,
    Boolean,
    Int32,
    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Delegate,
    Enum,
    TypeParameter,
    Array,
    Pointer,
    Dynamic,
    /// The frontend could not bind the type.
    Error,
}

impl TypeKind {
    /// Types declared with a name (as opposed to arrays, pointers, type
    /// parameters and `dynamic`).
    #[inline]
    pub const fn is_named(self) -> bool {
        matches!(
            self,
            TypeKind::Class
                | TypeKind::Struct
                | TypeKind::Interface
                | TypeKind::Delegate
                | TypeKind::Enum
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeData {
    /// Simple name without arity or type arguments (`Task` for `Task<int>`).
    pub name: String,
    pub kind: TypeKind,
    pub special: SpecialType,
    /// Number of type parameters of the definition.
    pub arity: u32,
    /// Unconstructed definition for constructed generics, `None` when this
    /// entry is itself a definition.
    pub original: Option<TypeId>,
    /// Enclosing namespace or type symbol.
    pub containing: Option<SymbolId>,
    /// Members declared on the type.
    pub members: Vec<SymbolId>,
    /// Constraint types of a type parameter, in declaration order.
    pub constraints: Vec<TypeId>,
    /// Type arguments of a constructed generic.
    pub type_arguments: Vec<TypeId>,
}

impl TypeData {
    /// A named type definition.
    pub fn named(
        name: impl Into<String>,
        kind: TypeKind,
        arity: u32,
        containing: Option<SymbolId>,
    ) -> Self {
        TypeData {
            name: name.into(),
            kind,
            special: SpecialType::None,
            arity,
            original: None,
            containing,
            members: Vec::new(),
            constraints: Vec::new(),
            type_arguments: Vec::new(),
        }
    }

    /// A type parameter with its constraint types.
    pub fn type_parameter(
        name: impl Into<String>,
        constraints: Vec<TypeId>,
        containing: Option<SymbolId>,
    ) -> Self {
        TypeData {
            constraints,
            ..TypeData::named(name, TypeKind::TypeParameter, 0, containing)
        }
    }

    #[must_use]
    pub fn with_special(mut self, special: SpecialType) -> Self {
        self.special = special;
        self
    }

    #[inline]
    pub fn is_type_parameter(&self) -> bool {
        self.kind == TypeKind::TypeParameter
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.special == SpecialType::Void
    }
}
