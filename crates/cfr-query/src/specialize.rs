//! Type-parameter specialization for member access.

use cfr_semantic::{SemanticModel, TypeId};
use cfr_syntax::{NodeArena, NodeIndex};
use tracing::trace;

/// Narrow `type_parameter` to the constraint that supplies the member being
/// accessed at `usage_site`.
///
/// Only applies when `usage_site` is the left operand of `usage_site.Name`.
/// Constraints are tried in declaration order and the first one declaring a
/// member called `Name` wins. This is first-match, not constraint-based
/// overload resolution: `where T : IA, IB` with `Name` on both picks `IA`.
/// In every other case the type parameter is returned unchanged.
pub fn specialize_type_parameter(
    arena: &NodeArena,
    model: &dyn SemanticModel,
    type_parameter: TypeId,
    usage_site: NodeIndex,
) -> TypeId {
    let Some(member_name) = accessed_member_name(arena, usage_site) else {
        return type_parameter;
    };
    let Some(data) = model.type_data(type_parameter) else {
        return type_parameter;
    };
    for &constraint in &data.constraints {
        if declares_member(model, constraint, member_name) {
            trace!(
                type_parameter = type_parameter.0,
                constraint = constraint.0,
                member = member_name,
                "specialize_type_parameter: constraint supplies member"
            );
            return constraint;
        }
    }
    type_parameter
}

/// Does `ty` declare a member named `name`?
///
/// Constructed generics that list no members of their own are answered from
/// their definition.
pub fn declares_member(model: &dyn SemanticModel, ty: TypeId, name: &str) -> bool {
    let Some(data) = model.type_data(ty) else {
        return false;
    };
    let members = if data.members.is_empty() {
        data.original
            .and_then(|original| model.type_data(original))
            .map_or(&[][..], |definition| definition.members.as_slice())
    } else {
        data.members.as_slice()
    };
    members
        .iter()
        .any(|&member| model.symbol(member).is_some_and(|symbol| symbol.name == name))
}

/// `Name` when `usage_site` is the `expression` of `expression.Name`.
fn accessed_member_name(arena: &NodeArena, usage_site: NodeIndex) -> Option<&str> {
    let parent = arena.parent_of(usage_site);
    let access = arena.get_access_expr_at(parent)?;
    if access.expression != usage_site {
        return None;
    }
    arena.simple_name_text(access.name)
}
