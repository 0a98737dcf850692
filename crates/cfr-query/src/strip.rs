//! Expression normalization.

use cfr_common::limits::MAX_EXPRESSION_UNWRAP_DEPTH;
use cfr_syntax::{NodeArena, NodeIndex};
use tracing::debug;

/// Peel parenthesized, `await`, `checked`, `unchecked`, `ref` and `throw`
/// wrappers until the underlying expression is reached.
///
/// Only existing nodes are returned, so the result's span never exceeds the
/// input's. Stripping an already stripped expression returns it unchanged.
pub fn strip_expression(arena: &NodeArena, expression: NodeIndex) -> NodeIndex {
    let mut current = expression;
    for _ in 0..MAX_EXPRESSION_UNWRAP_DEPTH {
        let Some(node) = arena.get(current) else {
            return current;
        };
        let Some(wrapped) = arena.get_wrapped_expr(node) else {
            return current;
        };
        if wrapped.expression.is_none() {
            return current;
        }
        current = wrapped.expression;
    }
    debug!(
        start = expression.0,
        reached = current.0,
        "strip_expression: unwrap limit reached"
    );
    current
}
