//! Node kinds and declaration modifiers.

use cfr_common::Span;
use serde::Serialize;
use smallvec::SmallVec;

/// Every node kind the arena can hold.
///
/// The set is closed: code that matches on it exhaustively is told by the
/// compiler when a new kind is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    // Names and type syntax
    Identifier,
    GenericName,
    QualifiedName,
    AliasQualifiedName,
    PredefinedType,
    NullableType,
    ArrayType,
    PointerType,

    // Expressions that only wrap another expression
    ParenthesizedExpression,
    AwaitExpression,
    CheckedExpression,
    UncheckedExpression,
    RefExpression,
    ThrowExpression,

    // Other expressions
    SimpleMemberAccessExpression,
    InvocationExpression,
    LiteralExpression,
    BinaryExpression,

    // Function-like declarations
    MethodDeclaration,
    ConstructorDeclaration,
    DestructorDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    LocalFunctionStatement,

    // Anonymous functions
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    AnonymousMethodExpression,

    // Accessors and their owners
    GetAccessorDeclaration,
    SetAccessorDeclaration,
    InitAccessorDeclaration,
    AddAccessorDeclaration,
    RemoveAccessorDeclaration,
    AccessorList,
    PropertyDeclaration,
    IndexerDeclaration,
    EventDeclaration,

    // Shared pieces
    ParameterList,
    Parameter,
    Block,
    ArrowExpressionClause,
}

impl SyntaxKind {
    /// Expressions whose only role is to wrap a single sub-expression.
    #[inline]
    pub const fn is_wrapping_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::ParenthesizedExpression
                | SyntaxKind::AwaitExpression
                | SyntaxKind::CheckedExpression
                | SyntaxKind::UncheckedExpression
                | SyntaxKind::RefExpression
                | SyntaxKind::ThrowExpression
        )
    }

    /// Unqualified names (`Foo`, `Foo<T>`).
    #[inline]
    pub const fn is_simple_name(self) -> bool {
        matches!(self, SyntaxKind::Identifier | SyntaxKind::GenericName)
    }

    /// Declarations read through the method-like data pool.
    #[inline]
    pub const fn is_method_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::MethodDeclaration
                | SyntaxKind::ConstructorDeclaration
                | SyntaxKind::DestructorDeclaration
                | SyntaxKind::OperatorDeclaration
                | SyntaxKind::ConversionOperatorDeclaration
                | SyntaxKind::LocalFunctionStatement
        )
    }

    #[inline]
    pub const fn is_anonymous_function(self) -> bool {
        matches!(
            self,
            SyntaxKind::SimpleLambdaExpression
                | SyntaxKind::ParenthesizedLambdaExpression
                | SyntaxKind::AnonymousMethodExpression
        )
    }

    #[inline]
    pub const fn is_accessor(self) -> bool {
        matches!(
            self,
            SyntaxKind::GetAccessorDeclaration
                | SyntaxKind::SetAccessorDeclaration
                | SyntaxKind::InitAccessorDeclaration
                | SyntaxKind::AddAccessorDeclaration
                | SyntaxKind::RemoveAccessorDeclaration
        )
    }

    /// Declarations that own an accessor list.
    #[inline]
    pub const fn is_property_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::PropertyDeclaration
                | SyntaxKind::IndexerDeclaration
                | SyntaxKind::EventDeclaration
        )
    }
}

/// Keywords that name built-in types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PredefinedKeyword {
    Void,
    Bool,
    Byte,
    Char,
    Decimal,
    Double,
    Float,
    Int,
    Long,
    Object,
    SByte,
    Short,
    String,
    UInt,
    ULong,
    UShort,
}

impl PredefinedKeyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            PredefinedKeyword::Void => "void",
            PredefinedKeyword::Bool => "bool",
            PredefinedKeyword::Byte => "byte",
            PredefinedKeyword::Char => "char",
            PredefinedKeyword::Decimal => "decimal",
            PredefinedKeyword::Double => "double",
            PredefinedKeyword::Float => "float",
            PredefinedKeyword::Int => "int",
            PredefinedKeyword::Long => "long",
            PredefinedKeyword::Object => "object",
            PredefinedKeyword::SByte => "sbyte",
            PredefinedKeyword::Short => "short",
            PredefinedKeyword::String => "string",
            PredefinedKeyword::UInt => "uint",
            PredefinedKeyword::ULong => "ulong",
            PredefinedKeyword::UShort => "ushort",
        }
    }
}

/// Declaration modifier keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ModifierKind {
    Public,
    Private,
    Protected,
    Internal,
    File,
    Static,
    Async,
    Partial,
    Abstract,
    Virtual,
    Override,
    Sealed,
    New,
    Extern,
    Unsafe,
    ReadOnly,
    Const,
    Volatile,
    Required,
}

impl ModifierKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ModifierKind::Public => "public",
            ModifierKind::Private => "private",
            ModifierKind::Protected => "protected",
            ModifierKind::Internal => "internal",
            ModifierKind::File => "file",
            ModifierKind::Static => "static",
            ModifierKind::Async => "async",
            ModifierKind::Partial => "partial",
            ModifierKind::Abstract => "abstract",
            ModifierKind::Virtual => "virtual",
            ModifierKind::Override => "override",
            ModifierKind::Sealed => "sealed",
            ModifierKind::New => "new",
            ModifierKind::Extern => "extern",
            ModifierKind::Unsafe => "unsafe",
            ModifierKind::ReadOnly => "readonly",
            ModifierKind::Const => "const",
            ModifierKind::Volatile => "volatile",
            ModifierKind::Required => "required",
        }
    }
}

/// One modifier token as written in source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub span: Span,
}

impl Modifier {
    pub const fn new(kind: ModifierKind, span: Span) -> Self {
        Modifier { kind, span }
    }
}

/// Modifiers in source order. Most declarations carry fewer than four.
pub type ModifierList = SmallVec<[Modifier; 4]>;
