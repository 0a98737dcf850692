//! Semantic-resolution queries for the rewriter.
//!
//! Every query here is a pure read over a [`NodeArena`](cfr_syntax::NodeArena)
//! and a [`SemanticModel`](cfr_semantic::SemanticModel) owned by the caller:
//! - `strip` - peel parentheses, `await`, `checked`, `ref` and `throw`
//! - `full_name` - match a type against a namespace-qualified name, ignoring arity
//! - `modifiers` - modifier lookups
//! - `specialize` - narrow a type parameter through its constraints
//! - `resolver` - result type and target symbol of an expression
//! - `voidness` - does a return form imply no value?
//! - `function_like` - one view over methods, local functions, lambdas and accessors

pub mod error;
pub mod full_name;
pub mod function_like;
pub mod modifiers;
pub mod options;
pub mod query;
pub mod resolver;
pub mod specialize;
pub mod strip;
pub mod voidness;

pub use error::AdapterError;
pub use full_name::{TASK_NAMESPACE_PATH, TASK_TYPE_NAME, is_non_generic_task, matches_full_name};
pub use function_like::{FunctionLike, FunctionShape};
pub use modifiers::{ModifierFlags, has_modifier};
pub use options::{QueryOptions, ResolutionAccuracy, TypeFormation};
pub use query::SemanticQuery;
pub use resolver::{deep_target, immediate_target};
pub use specialize::{declares_member, specialize_type_parameter};
pub use strip::strip_expression;
pub use voidness::{
    ReturnForm, TASK_SPELLINGS, implies_void, syntactic_return_type_implies_void,
    type_implies_void,
};

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "../tests/strip_tests.rs"]
mod strip_tests;
#[cfg(test)]
#[path = "../tests/full_name_tests.rs"]
mod full_name_tests;
#[cfg(test)]
#[path = "../tests/modifiers_tests.rs"]
mod modifiers_tests;
#[cfg(test)]
#[path = "../tests/specialize_tests.rs"]
mod specialize_tests;
#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;
#[cfg(test)]
#[path = "../tests/voidness_tests.rs"]
mod voidness_tests;
#[cfg(test)]
#[path = "../tests/function_like_tests.rs"]
mod function_like_tests;
#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
