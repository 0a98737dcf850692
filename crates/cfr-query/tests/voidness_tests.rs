use super::*;
use crate::test_fixtures::*;
use cfr_common::Span;
use cfr_semantic::{SemanticModel, SemanticTableBuilder, Symbol, SymbolKind, TypeInfo};
use cfr_syntax::*;

// =============================================================================
// Resolved types
// =============================================================================

#[test]
fn void_and_async_task_imply_void() {
    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    let table = builder.build();

    assert!(type_implies_void(&table, known.void, false));
    assert!(type_implies_void(&table, known.void, true));
    assert!(type_implies_void(&table, known.task, true));
    assert!(!type_implies_void(&table, known.task, false));
    assert!(!type_implies_void(&table, known.task_of_string, true));
    assert!(!type_implies_void(&table, known.task_of_t, true));
    assert!(!type_implies_void(&table, known.string, true));
}

#[test]
#[should_panic(expected = "without a semantic model")]
fn resolved_type_needs_a_model() {
    let arena = NodeArena::new();
    implies_void(&arena, ReturnForm::Type(cfr_semantic::TypeId(0)), false, None);
}

// =============================================================================
// Syntax only
// =============================================================================

#[test]
fn missing_annotation_and_void_keyword() {
    let mut arena = NodeArena::new();
    let void = keyword(&mut arena, PredefinedKeyword::Void);
    let int = keyword(&mut arena, PredefinedKeyword::Int);

    assert!(syntactic_return_type_implies_void(&arena, NodeIndex::NONE, false));
    assert!(syntactic_return_type_implies_void(&arena, void, false));
    assert!(syntactic_return_type_implies_void(&arena, void, true));
    assert!(!syntactic_return_type_implies_void(&arena, int, true));
}

#[test]
fn every_task_spelling_is_recognized_when_async() {
    let mut arena = NodeArena::new();
    let spellings = [
        qualified(&mut arena, &["Task"]),
        qualified(&mut arena, &["Tasks", "Task"]),
        qualified(&mut arena, &["System", "Threading", "Tasks", "Task"]),
        global_qualified(&mut arena, &["System", "Threading", "Tasks", "Task"]),
    ];

    for (annotation, expected) in spellings.into_iter().zip(TASK_SPELLINGS) {
        assert_eq!(arena.type_text(annotation).as_deref(), Some(expected));
        assert!(syntactic_return_type_implies_void(&arena, annotation, true));
        assert!(!syntactic_return_type_implies_void(&arena, annotation, false));
    }
}

#[test]
fn other_task_like_spellings_are_not_void() {
    let mut arena = NodeArena::new();
    let int = keyword(&mut arena, PredefinedKeyword::Int);
    let generic_task = generic(&mut arena, "Task", vec![int]);
    let value_task = qualified(&mut arena, &["ValueTask"]);
    let threading_task = qualified(&mut arena, &["Threading", "Tasks", "Task"]);

    for annotation in [generic_task, value_task, threading_task] {
        assert!(!syntactic_return_type_implies_void(&arena, annotation, true));
    }
}

#[test]
fn deeply_nested_annotation_is_not_void() {
    // async Tasks.Tasks.Tasks. ... .Task M()
    let mut arena = NodeArena::new();
    let mut annotation = ident(&mut arena, "Tasks");
    for _ in 0..200_000 {
        let right = ident(&mut arena, "Tasks");
        annotation = arena.add_qualified_name(
            SyntaxKind::QualifiedName,
            Span::EMPTY,
            QualifiedNameData {
                left: annotation,
                right,
            },
        );
    }
    let task = ident(&mut arena, "Task");
    annotation = arena.add_qualified_name(
        SyntaxKind::QualifiedName,
        Span::EMPTY,
        QualifiedNameData {
            left: annotation,
            right: task,
        },
    );

    assert!(!syntactic_return_type_implies_void(&arena, annotation, true));
    assert!(!implies_void(
        &arena,
        ReturnForm::Annotation(annotation),
        true,
        None
    ));
}

// =============================================================================
// With a model
// =============================================================================

#[test]
fn annotation_is_classified_by_its_resolved_type() {
    // `using Job = System.Threading.Tasks.Task;` then `async Job M()`
    let mut arena = NodeArena::new();
    let alias = qualified(&mut arena, &["Job"]);
    let untyped = qualified(&mut arena, &["Task"]);

    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    builder.set_type_info(alias, TypeInfo::unconverted(known.task));
    let table = builder.build();
    let model: &dyn SemanticModel = &table;

    let form = ReturnForm::Annotation(alias);
    assert!(implies_void(&arena, form, true, Some(model)));
    assert!(!implies_void(&arena, form, true, None));

    // The model has no type for it, so the spelling does not matter.
    let form = ReturnForm::Annotation(untyped);
    assert!(!implies_void(&arena, form, true, Some(model)));
    assert!(implies_void(&arena, form, true, None));

    let none = ReturnForm::Annotation(NodeIndex::NONE);
    assert!(implies_void(&arena, none, false, Some(model)));
    assert!(implies_void(
        &arena,
        ReturnForm::Type(known.void),
        false,
        Some(model)
    ));
}

#[test]
fn functions_are_classified_through_the_adapter() {
    let mut arena = NodeArena::new();

    // public async Task RunAsync() { }
    let task = qualified(&mut arena, &["Task"]);
    let name = ident(&mut arena, "RunAsync");
    let parameters = parameter_list(&mut arena, &[]);
    let body = empty_block(&mut arena);
    let run = arena.add_method_like(
        SyntaxKind::MethodDeclaration,
        Span::EMPTY,
        MethodLikeData {
            modifiers: modifiers(&[ModifierKind::Public, ModifierKind::Async]),
            return_type: task,
            name,
            parameters,
            body,
            expression_body: NodeIndex::NONE,
        },
    );

    // async () => "done"   bound to a Task<string>-returning lambda symbol
    let done = arena.add_literal(span_of("\"done\""), "\"done\"");
    let lambda_parameters = parameter_list(&mut arena, &[]);
    let lambda = arena.add_anonymous_function(
        SyntaxKind::ParenthesizedLambdaExpression,
        Span::EMPTY,
        AnonymousFunctionData {
            modifiers: modifiers(&[ModifierKind::Async]),
            return_type: NodeIndex::NONE,
            parameter: NodeIndex::NONE,
            parameters: lambda_parameters,
            body: NodeIndex::NONE,
            expression_body: done,
        },
    );

    // () => { }   with no symbol information
    let unbound_parameters = parameter_list(&mut arena, &[]);
    let unbound_body = empty_block(&mut arena);
    let unbound = arena.add_anonymous_function(
        SyntaxKind::ParenthesizedLambdaExpression,
        Span::EMPTY,
        AnonymousFunctionData {
            modifiers: ModifierList::new(),
            return_type: NodeIndex::NONE,
            parameter: NodeIndex::NONE,
            parameters: unbound_parameters,
            body: unbound_body,
            expression_body: NodeIndex::NONE,
        },
    );

    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    builder.set_type_info(task, TypeInfo::unconverted(known.task));
    let lambda_symbol = builder.add_symbol(Symbol::new(
        "",
        SymbolKind::Method,
        Some(known.task_of_string),
        None,
    ));
    builder.set_symbol_info(lambda, lambda_symbol);
    let table = builder.build();
    let query = SemanticQuery::new(&arena, &table);

    let classify = |node| {
        let function = FunctionLike::from_node(&arena, node).expect("function-like node");
        query.function_implies_void(&function)
    };
    assert!(classify(run));
    assert!(!classify(lambda));
    assert!(classify(unbound));
}
