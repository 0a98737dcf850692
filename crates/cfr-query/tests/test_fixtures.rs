//! Shared builders for query tests.
//!
//! Spans are not meaningful here; every node gets a span covering its own
//! text starting at zero.

use cfr_common::Span;
use cfr_semantic::{
    SemanticTableBuilder, SpecialType, Symbol, SymbolKind, TypeData, TypeId, TypeKind,
};
use cfr_syntax::*;

pub(crate) fn span_of(text: &str) -> Span {
    Span::new(0, text.len() as u32)
}

pub(crate) fn ident(arena: &mut NodeArena, text: &str) -> NodeIndex {
    arena.add_identifier(span_of(text), text)
}

/// `A.B.C`, left-nested like the parser builds it.
pub(crate) fn qualified(arena: &mut NodeArena, parts: &[&str]) -> NodeIndex {
    let mut result = NodeIndex::NONE;
    for part in parts {
        let right = ident(arena, part);
        result = if result.is_none() {
            right
        } else {
            arena.add_qualified_name(
                SyntaxKind::QualifiedName,
                Span::EMPTY,
                QualifiedNameData {
                    left: result,
                    right,
                },
            )
        };
    }
    result
}

/// `global::A.B.C`
pub(crate) fn global_qualified(arena: &mut NodeArena, parts: &[&str]) -> NodeIndex {
    let global = ident(arena, "global");
    let first = ident(arena, parts[0]);
    let mut result = arena.add_qualified_name(
        SyntaxKind::AliasQualifiedName,
        Span::EMPTY,
        QualifiedNameData {
            left: global,
            right: first,
        },
    );
    for part in &parts[1..] {
        let right = ident(arena, part);
        result = arena.add_qualified_name(
            SyntaxKind::QualifiedName,
            Span::EMPTY,
            QualifiedNameData {
                left: result,
                right,
            },
        );
    }
    result
}

pub(crate) fn generic(arena: &mut NodeArena, name: &str, arguments: Vec<NodeIndex>) -> NodeIndex {
    arena.add_generic_name(
        span_of(name),
        GenericNameData {
            identifier: name.into(),
            type_arguments: NodeList::new(arguments),
        },
    )
}

pub(crate) fn keyword(arena: &mut NodeArena, keyword: PredefinedKeyword) -> NodeIndex {
    arena.add_predefined_type(span_of(keyword.as_str()), keyword)
}

pub(crate) fn wrap(arena: &mut NodeArena, kind: SyntaxKind, expression: NodeIndex) -> NodeIndex {
    arena.add_wrapped_expr(kind, Span::EMPTY, WrappedExprData { expression })
}

/// `expression.name`
pub(crate) fn member_access(arena: &mut NodeArena, expression: NodeIndex, name: &str) -> NodeIndex {
    let name = ident(arena, name);
    arena.add_member_access(Span::EMPTY, AccessExprData { expression, name })
}

/// `callee()`
pub(crate) fn call(arena: &mut NodeArena, callee: &str) -> NodeIndex {
    let expression = ident(arena, callee);
    arena.add_invocation(
        Span::EMPTY,
        InvocationData {
            expression,
            arguments: NodeList::default(),
        },
    )
}

pub(crate) fn modifiers(kinds: &[ModifierKind]) -> ModifierList {
    kinds
        .iter()
        .map(|&kind| Modifier::new(kind, span_of(kind.as_str())))
        .collect()
}

pub(crate) fn parameter(arena: &mut NodeArena, name: &str) -> NodeIndex {
    arena.add_parameter(
        span_of(name),
        ParameterData {
            modifiers: ModifierList::new(),
            type_annotation: NodeIndex::NONE,
            name: name.into(),
        },
    )
}

pub(crate) fn parameter_list(arena: &mut NodeArena, names: &[&str]) -> NodeIndex {
    let parameters = names.iter().map(|name| parameter(arena, name)).collect();
    arena.add_parameter_list(
        Span::EMPTY,
        ParameterListData {
            parameters: NodeList::new(parameters),
        },
    )
}

pub(crate) fn empty_block(arena: &mut NodeArena) -> NodeIndex {
    arena.add_block(
        Span::new(0, 2),
        BlockData {
            statements: NodeList::default(),
        },
    )
}

pub(crate) fn arrow(arena: &mut NodeArena, expression: NodeIndex) -> NodeIndex {
    arena.add_arrow_clause(Span::EMPTY, ArrowClauseData { expression })
}

/// Well-known types registered by [`well_known_types`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct WellKnown {
    pub void: TypeId,
    pub int: TypeId,
    pub string: TypeId,
    /// Non-generic `System.Threading.Tasks.Task`.
    pub task: TypeId,
    /// `System.Threading.Tasks.Task<TResult>` definition.
    pub task_of_t: TypeId,
    /// `Task<string>`
    pub task_of_string: TypeId,
}

pub(crate) fn well_known_types(builder: &mut SemanticTableBuilder) -> WellKnown {
    let system = builder.namespace(&["System"]);
    let tasks = builder.namespace(&["System", "Threading", "Tasks"]);
    let void = builder.add_type(
        TypeData::named("Void", TypeKind::Struct, 0, Some(system)).with_special(SpecialType::Void),
    );
    let int = builder.add_type(
        TypeData::named("Int32", TypeKind::Struct, 0, Some(system))
            .with_special(SpecialType::Int32),
    );
    let string = builder.add_type(
        TypeData::named("String", TypeKind::Class, 0, Some(system))
            .with_special(SpecialType::String),
    );
    let task = builder.add_type(TypeData::named("Task", TypeKind::Class, 0, Some(tasks)));
    let task_of_t = builder.add_type(TypeData::named("Task", TypeKind::Class, 1, Some(tasks)));
    let task_of_string = builder
        .construct(task_of_t, vec![string])
        .expect("Task<TResult> is registered");
    WellKnown {
        void,
        int,
        string,
        task,
        task_of_t,
        task_of_string,
    }
}

/// `interface IFoo { void Foo(); }` and `T : IFoo`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ConstrainedT {
    pub ifoo: TypeId,
    pub t: TypeId,
}

pub(crate) fn constrained_t(builder: &mut SemanticTableBuilder) -> ConstrainedT {
    let app = builder.namespace(&["App"]);
    let ifoo = builder.add_type(TypeData::named("IFoo", TypeKind::Interface, 0, Some(app)));
    builder
        .add_member(ifoo, Symbol::new("Foo", SymbolKind::Method, None, None))
        .expect("IFoo is registered");
    let t = builder.add_type(TypeData::type_parameter("T", vec![ifoo], None));
    ConstrainedT { ifoo, t }
}
