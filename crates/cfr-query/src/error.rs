//! Errors for classifying syntax as function-like.

use cfr_syntax::{NodeIndex, SyntaxKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdapterError {
    #[error("node {node:?} is not in the arena")]
    UnknownNode { node: NodeIndex },

    #[error("{kind:?} is not a function-like construct")]
    NotFunctionLike { kind: SyntaxKind },

    #[error("accessor {accessor:?} has no enclosing property, indexer or event declaration")]
    MissingEnclosingDeclaration { accessor: NodeIndex },
}
