use super::*;
use cfr_syntax::NodeIndex;

#[test]
fn fresh_builder_has_object_in_system() {
    let builder = SemanticTableBuilder::new();
    let object = builder.object_type();
    let table = builder.build();

    let data = table.type_data(object).expect("object type");
    assert_eq!(data.name, "Object");
    assert_eq!(data.special, SpecialType::Object);
    let system = table
        .symbol(data.containing.expect("containing namespace"))
        .expect("System symbol");
    assert_eq!(system.name, "System");
    assert_eq!(system.kind, SymbolKind::Namespace);
    assert_eq!(table.object_type(), object);
}

#[test]
fn namespace_is_find_or_create() {
    let mut builder = SemanticTableBuilder::new();
    let tasks = builder.namespace(&["System", "Threading", "Tasks"]);
    let again = builder.namespace(&["System", "Threading", "Tasks"]);
    let threading = builder.namespace(&["System", "Threading"]);
    let table = builder.build();

    assert_eq!(tasks, again);
    assert_eq!(
        table.symbol(tasks).and_then(|s| s.containing),
        Some(threading)
    );
}

#[test]
fn construct_shares_definition_identity() {
    let mut builder = SemanticTableBuilder::new();
    let tasks = builder.namespace(&["System", "Threading", "Tasks"]);
    let string = builder.add_type(
        TypeData::named("String", TypeKind::Class, 0, None).with_special(SpecialType::String),
    );
    let task_of_t = builder.add_type(TypeData::named("Task", TypeKind::Class, 1, Some(tasks)));
    let task_of_string = builder
        .construct(task_of_t, vec![string])
        .expect("constructed type");
    assert!(builder.construct(TypeId(999), vec![]).is_none());
    let table = builder.build();

    let data = table.type_data(task_of_string).expect("constructed");
    assert_eq!(data.original, Some(task_of_t));
    assert_eq!(data.name, "Task");
    assert_eq!(data.arity, 1);
    assert_eq!(data.type_arguments, vec![string]);
    assert_eq!(data.containing, Some(tasks));
}

#[test]
fn per_node_queries_default_to_absent() {
    let table = SemanticTableBuilder::new().build();
    let node = NodeIndex(7);

    assert_eq!(table.type_info(node), TypeInfo::default());
    assert_eq!(table.operation(node), None);
    assert_eq!(table.symbol_info(node), None);
    assert!(table.member_group(node).is_empty());
}

#[test]
fn member_group_preserves_order() {
    let mut builder = SemanticTableBuilder::new();
    let first = builder.add_symbol(Symbol::new("M", SymbolKind::Method, None, None));
    let second = builder.add_symbol(Symbol::new("M", SymbolKind::Method, None, None));
    let node = NodeIndex(3);
    builder.set_member_group(node, [second, first]);
    let table = builder.build();

    assert_eq!(table.member_group(node), &[second, first]);
}

#[test]
fn operation_kinds_expose_wrapped_operation() {
    let mut builder = SemanticTableBuilder::new();
    let local = builder.add_symbol(Symbol::new("x", SymbolKind::Local, None, None));
    let reference = builder.add_operation(
        OperationKind::LocalReference { local },
        None,
        NodeIndex(1),
    );
    let conversion = builder.add_operation_for(
        NodeIndex(2),
        OperationKind::Conversion { operand: reference },
        None,
    );
    let table = builder.build();

    let data = table.operation_data(conversion).expect("conversion");
    assert_eq!(data.kind.wrapped_operation(), Some(reference));
    assert_eq!(table.operation(NodeIndex(2)), Some(conversion));
    assert!(OperationKind::None.is_none_sentinel());
    assert_eq!(OperationKind::Literal.wrapped_operation(), None);
    assert_eq!(
        OperationKind::Binary {
            left: reference,
            right: reference
        }
        .wrapped_operation(),
        None
    );
}

#[test]
fn add_member_records_declaration() {
    let mut builder = SemanticTableBuilder::new();
    let ifoo = builder.add_type(TypeData::named("IFoo", TypeKind::Interface, 0, None));
    let foo = builder
        .add_member(ifoo, Symbol::new("Foo", SymbolKind::Method, None, None))
        .expect("member");
    assert!(
        builder
            .add_member(TypeId(999), Symbol::new("Bar", SymbolKind::Field, None, None))
            .is_none()
    );
    let table = builder.build();

    assert_eq!(table.type_data(ifoo).map(|d| d.members.clone()), Some(vec![foo]));
}
