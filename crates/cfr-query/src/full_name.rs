//! Namespace-qualified type identity, ignoring generic arity.

use cfr_common::limits::MAX_CONTAINING_CHAIN_DEPTH;
use cfr_semantic::{SemanticModel, TypeData, TypeId};
use tracing::debug;

/// Simple name of `System.Threading.Tasks.Task`.
pub const TASK_TYPE_NAME: &str = "Task";

/// Namespaces containing `Task`, innermost first.
pub const TASK_NAMESPACE_PATH: [&str; 3] = ["Tasks", "Threading", "System"];

/// Does `ty` name `expected_name` declared inside `namespace_path`?
///
/// `namespace_path` lists containing symbols innermost first
/// (`["Tasks", "Threading", "System"]`). Constructed generics are compared by
/// their definition, so `Task`, `Task<T>` and `Task<int>` all match `Task`.
/// Containers beyond the end of the path are not inspected.
pub fn matches_full_name(
    model: &dyn SemanticModel,
    ty: TypeId,
    expected_name: &str,
    namespace_path: &[&str],
) -> bool {
    let Some(definition) = original_definition(model, ty) else {
        return false;
    };
    if !definition.kind.is_named() || definition.name != expected_name {
        return false;
    }

    let mut containing = definition.containing;
    for (depth, expected) in namespace_path.iter().enumerate() {
        if depth as u32 >= MAX_CONTAINING_CHAIN_DEPTH {
            debug!(
                ty = ty.0,
                depth, "matches_full_name: containing chain limit reached"
            );
            return false;
        }
        let Some(symbol) = containing.and_then(|id| model.symbol(id)) else {
            return false;
        };
        if symbol.name != *expected {
            return false;
        }
        containing = symbol.containing;
    }
    true
}

/// Is `ty` exactly the non-generic `System.Threading.Tasks.Task`?
pub fn is_non_generic_task(model: &dyn SemanticModel, ty: TypeId) -> bool {
    matches_full_name(model, ty, TASK_TYPE_NAME, &TASK_NAMESPACE_PATH)
        && original_definition(model, ty).is_some_and(|definition| definition.arity == 0)
}

fn original_definition(model: &dyn SemanticModel, ty: TypeId) -> Option<&TypeData> {
    let data = model.type_data(ty)?;
    match data.original {
        Some(original) => model.type_data(original),
        None => Some(data),
    }
}
