//! Query configuration.

use serde::{Deserialize, Serialize};

/// How hard symbol resolution tries when the frontend has no direct answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionAccuracy {
    /// Only the operation's own target; indirections yield nothing.
    Exact,
    /// Look through address-of, conversions, unary operators, delegate
    /// creation, array element and dynamic indexer access.
    #[default]
    Approximate,
}

/// Which of an expression's two static types to report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeFormation {
    /// The expression's own type.
    WithoutConversion,
    /// The type after implicit conversion to what the context expects.
    #[default]
    PossiblyConverted,
}

/// Defaults applied by [`SemanticQuery`](crate::SemanticQuery) when a caller
/// does not pass an explicit accuracy or formation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOptions {
    pub accuracy: ResolutionAccuracy,
    pub formation: TypeFormation,
}
