//! The query context shared by the resolver and the voidness classifier.

use crate::full_name::matches_full_name;
use crate::options::QueryOptions;
use crate::specialize::specialize_type_parameter;
use crate::strip::strip_expression;
use cfr_semantic::{SemanticModel, TypeId};
use cfr_syntax::{NodeArena, NodeIndex};

/// Borrowed view over one syntax tree and its semantic model.
///
/// Constructing a query requires a model, so semantic queries cannot be asked
/// without one. The struct is `Copy` and holds no mutable state; any number of
/// threads may query the same tree through their own copies.
#[derive(Clone, Copy)]
pub struct SemanticQuery<'a> {
    arena: &'a NodeArena,
    model: &'a dyn SemanticModel,
    options: QueryOptions,
}

impl<'a> SemanticQuery<'a> {
    pub fn new(arena: &'a NodeArena, model: &'a dyn SemanticModel) -> Self {
        SemanticQuery {
            arena,
            model,
            options: QueryOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    #[inline]
    pub fn model(&self) -> &'a dyn SemanticModel {
        self.model
    }

    #[inline]
    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// See [`strip_expression`].
    #[inline]
    pub fn strip(&self, expression: NodeIndex) -> NodeIndex {
        strip_expression(self.arena, expression)
    }

    /// See [`specialize_type_parameter`].
    #[inline]
    pub fn specialize(&self, type_parameter: TypeId, usage_site: NodeIndex) -> TypeId {
        specialize_type_parameter(self.arena, self.model, type_parameter, usage_site)
    }

    /// See [`matches_full_name`].
    #[inline]
    pub fn matches_full_name(&self, ty: TypeId, expected_name: &str, namespace_path: &[&str]) -> bool {
        matches_full_name(self.model, ty, expected_name, namespace_path)
    }
}
