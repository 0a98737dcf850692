//! Semantic-resolution support layer for a C-family source rewriter.
//!
//! The rewriter's frontend parses source into a [`syntax::NodeArena`] and
//! binds it into a [`semantic::SemanticModel`]. This crate re-exports both and
//! the [`query`] layer that answers questions about them: result types, target
//! symbols, type-name identity, return voidness and a uniform view over
//! function-like declarations.
//!
//! ```ignore
//! use cfr::query::{FunctionLike, SemanticQuery};
//!
//! let query = SemanticQuery::new(&arena, &model);
//! let function = FunctionLike::from_node(&arena, method)?;
//! if query.function_implies_void(&function) {
//!     // rewrite `return x;` as `x; return;`
//! }
//! ```

pub use cfr_common as common;
pub use cfr_query as query;
pub use cfr_semantic as semantic;
pub use cfr_syntax as syntax;

pub use cfr_query::{
    AdapterError, FunctionLike, FunctionShape, QueryOptions, ResolutionAccuracy, SemanticQuery,
    TypeFormation,
};

// Opt-in tracing subscriber for debugging rewrites
pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
