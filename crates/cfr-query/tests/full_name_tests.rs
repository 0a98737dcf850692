use super::*;
use crate::test_fixtures::*;
use cfr_semantic::{SemanticTableBuilder, TypeData, TypeId, TypeKind};

#[test]
fn task_matches_regardless_of_arity() {
    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    let table = builder.build();

    for ty in [known.task, known.task_of_t, known.task_of_string] {
        assert!(matches_full_name(
            &table,
            ty,
            TASK_TYPE_NAME,
            &TASK_NAMESPACE_PATH
        ));
    }
}

#[test]
fn only_the_arity_zero_task_is_non_generic() {
    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    let table = builder.build();

    assert!(is_non_generic_task(&table, known.task));
    assert!(!is_non_generic_task(&table, known.task_of_t));
    assert!(!is_non_generic_task(&table, known.task_of_string));
    assert!(!is_non_generic_task(&table, known.void));
}

#[test]
fn task_in_another_namespace_does_not_match() {
    let mut builder = SemanticTableBuilder::new();
    let mine = builder.namespace(&["MyApp", "Threading", "Tasks"]);
    let task = builder.add_type(TypeData::named("Task", TypeKind::Class, 0, Some(mine)));
    let table = builder.build();

    assert!(!matches_full_name(&table, task, "Task", &TASK_NAMESPACE_PATH));
    assert!(matches_full_name(
        &table,
        task,
        "Task",
        &["Tasks", "Threading", "MyApp"]
    ));
    assert!(!is_non_generic_task(&table, task));
}

#[test]
fn chain_shorter_than_path_fails() {
    let mut builder = SemanticTableBuilder::new();
    let tasks = builder.namespace(&["Tasks"]);
    let task = builder.add_type(TypeData::named("Task", TypeKind::Class, 0, Some(tasks)));
    let orphan = builder.add_type(TypeData::named("Task", TypeKind::Class, 0, None));
    let table = builder.build();

    assert!(matches_full_name(&table, task, "Task", &["Tasks"]));
    assert!(!matches_full_name(&table, task, "Task", &TASK_NAMESPACE_PATH));
    assert!(!matches_full_name(&table, orphan, "Task", &["Tasks"]));
    // An empty path checks only the simple name.
    assert!(matches_full_name(&table, orphan, "Task", &[]));
}

#[test]
fn name_and_kind_must_match() {
    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    let tasks = builder.namespace(&["System", "Threading", "Tasks"]);
    let type_parameter = builder.add_type(TypeData::type_parameter("Task", vec![], Some(tasks)));
    let table = builder.build();

    assert!(!matches_full_name(
        &table,
        known.string,
        "Task",
        &TASK_NAMESPACE_PATH
    ));
    assert!(!matches_full_name(
        &table,
        type_parameter,
        "Task",
        &TASK_NAMESPACE_PATH
    ));
    assert!(!matches_full_name(
        &table,
        TypeId(9_999),
        "Task",
        &TASK_NAMESPACE_PATH
    ));
}

#[test]
fn path_order_is_innermost_first() {
    let mut builder = SemanticTableBuilder::new();
    let known = well_known_types(&mut builder);
    let table = builder.build();

    assert!(!matches_full_name(
        &table,
        known.task,
        "Task",
        &["System", "Threading", "Tasks"]
    ));
    assert!(matches_full_name(&table, known.string, "String", &["System"]));
}
