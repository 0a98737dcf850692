//! Syntax tree arena for the C-family source the rewriter works on.
//!
//! The frontend parses a file into a [`NodeArena`]: a flat store of [`Node`]s
//! addressed by [`NodeIndex`], with per-kind data pools and parent links. The
//! query layer only ever reads from it.
//!
//! - `base` - `NodeIndex` and `NodeList` handles
//! - `syntax_kind` - the closed set of node kinds and modifier kinds
//! - `node` - node records and typed node data
//! - `node_arena` - `add_*` builders used by frontends and tests
//! - `node_access` - typed getters, parent lookup and text rendering

pub mod base;
pub mod node;
mod node_access;
mod node_arena;
pub mod syntax_kind;

pub use base::{NodeIndex, NodeList};
pub use node::*;
pub use syntax_kind::{Modifier, ModifierKind, ModifierList, PredefinedKeyword, SyntaxKind};

#[cfg(test)]
#[path = "../tests/node_arena_tests.rs"]
mod node_arena_tests;
