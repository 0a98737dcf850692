//! One view over everything with a body and parameters.
//!
//! Methods (and constructors, destructors, operators), local functions,
//! anonymous functions and accessors store their pieces differently. The
//! adapter exposes the same modifiers, parameters and bodies for all of them.

use crate::error::AdapterError;
use crate::modifiers;
use cfr_syntax::{Modifier, NodeArena, NodeIndex, SyntaxKind};
use tracing::debug;

/// The syntactic shape behind a [`FunctionLike`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionShape {
    /// Method, constructor, destructor, operator or conversion operator.
    MethodLike(NodeIndex),
    LocalFunction(NodeIndex),
    /// Simple lambda, parenthesized lambda or anonymous method.
    AnonymousFunction(NodeIndex),
    /// Accessor plus the property, indexer or event declaring it.
    AccessorMethod {
        accessor: NodeIndex,
        enclosing: NodeIndex,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct FunctionLike<'a> {
    arena: &'a NodeArena,
    shape: FunctionShape,
}

impl<'a> FunctionLike<'a> {
    /// Classify `node`.
    ///
    /// Accessors are paired with the declaration that owns their accessor
    /// list.
    pub fn from_node(arena: &'a NodeArena, node: NodeIndex) -> Result<Self, AdapterError> {
        let kind = arena
            .kind(node)
            .ok_or(AdapterError::UnknownNode { node })?;
        let shape = match kind {
            SyntaxKind::LocalFunctionStatement => FunctionShape::LocalFunction(node),
            kind if kind.is_method_like() => FunctionShape::MethodLike(node),
            kind if kind.is_anonymous_function() => FunctionShape::AnonymousFunction(node),
            kind if kind.is_accessor() => FunctionShape::AccessorMethod {
                accessor: node,
                enclosing: enclosing_declaration(arena, node)?,
            },
            kind => return Err(AdapterError::NotFunctionLike { kind }),
        };
        Ok(FunctionLike { arena, shape })
    }

    /// Adapter for `accessor` declared by `enclosing`.
    pub fn accessor(arena: &'a NodeArena, accessor: NodeIndex, enclosing: NodeIndex) -> Self {
        debug_assert!(arena.kind(accessor).is_some_and(|kind| kind.is_accessor()));
        debug_assert!(
            arena
                .kind(enclosing)
                .is_some_and(|kind| kind.is_property_like())
        );
        FunctionLike {
            arena,
            shape: FunctionShape::AccessorMethod {
                accessor,
                enclosing,
            },
        }
    }

    #[inline]
    pub fn shape(&self) -> FunctionShape {
        self.shape
    }

    /// The function's own node (the accessor, for accessors).
    pub fn node(&self) -> NodeIndex {
        match self.shape {
            FunctionShape::MethodLike(node)
            | FunctionShape::LocalFunction(node)
            | FunctionShape::AnonymousFunction(node) => node,
            FunctionShape::AccessorMethod { accessor, .. } => accessor,
        }
    }

    pub fn enclosing_declaration(&self) -> Option<NodeIndex> {
        match self.shape {
            FunctionShape::AccessorMethod { enclosing, .. } => Some(enclosing),
            _ => None,
        }
    }

    /// Modifiers in source order. Accessors report the modifiers of their
    /// enclosing declaration.
    pub fn modifiers(&self) -> &'a [Modifier] {
        let arena = self.arena;
        let modifiers = match self.shape {
            FunctionShape::MethodLike(node) | FunctionShape::LocalFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_method_like(n))
                .map(|data| data.modifiers.as_slice()),
            FunctionShape::AnonymousFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_anonymous_function(n))
                .map(|data| data.modifiers.as_slice()),
            FunctionShape::AccessorMethod { enclosing, .. } => arena
                .get_property_like_at(enclosing)
                .map(|data| data.modifiers.as_slice()),
        };
        modifiers.unwrap_or(&[])
    }

    /// Parameters in source order.
    ///
    /// A simple lambda yields its single parameter; accessors and anonymous
    /// methods written without a list yield none.
    ///
    /// # Panics
    ///
    /// On a simple lambda without its parameter, a parenthesized lambda
    /// without a parameter list, or an anonymous-function node of any other
    /// kind.
    pub fn parameters(&self) -> &'a [NodeIndex] {
        let arena = self.arena;
        match self.shape {
            FunctionShape::MethodLike(node) | FunctionShape::LocalFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_method_like(n))
                .map_or(&[][..], |data| parameter_slice(arena, data.parameters)),
            FunctionShape::AnonymousFunction(node) => anonymous_parameters(arena, node),
            FunctionShape::AccessorMethod { .. } => &[],
        }
    }

    /// Block body, if the function has one.
    pub fn block_body(&self) -> Option<NodeIndex> {
        let arena = self.arena;
        let body = match self.shape {
            FunctionShape::MethodLike(node) | FunctionShape::LocalFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_method_like(n))
                .map(|data| data.body),
            FunctionShape::AnonymousFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_anonymous_function(n))
                .map(|data| data.body),
            FunctionShape::AccessorMethod { accessor, .. } => arena
                .get(accessor)
                .and_then(|n| arena.get_accessor(n))
                .map(|data| data.body),
        };
        body.and_then(NodeIndex::into_option)
    }

    /// Expression of an expression-bodied function (`=> expr`), without the
    /// arrow clause.
    pub fn expression_body(&self) -> Option<NodeIndex> {
        let arena = self.arena;
        let expression = match self.shape {
            FunctionShape::MethodLike(node) | FunctionShape::LocalFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_method_like(n))
                .map(|data| arena.arrow_clause_expression(data.expression_body)),
            FunctionShape::AnonymousFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_anonymous_function(n))
                .map(|data| data.expression_body),
            FunctionShape::AccessorMethod { accessor, .. } => arena
                .get(accessor)
                .and_then(|n| arena.get_accessor(n))
                .map(|data| arena.arrow_clause_expression(data.expression_body)),
        };
        expression.and_then(NodeIndex::into_option)
    }

    /// Declared return type annotation.
    ///
    /// Getters report the type of their property or indexer. Constructors,
    /// destructors, lambdas without an explicit type and the remaining
    /// accessors report none.
    pub fn return_type(&self) -> Option<NodeIndex> {
        let arena = self.arena;
        let annotation = match self.shape {
            FunctionShape::MethodLike(node) | FunctionShape::LocalFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_method_like(n))
                .map(|data| data.return_type),
            FunctionShape::AnonymousFunction(node) => arena
                .get(node)
                .and_then(|n| arena.get_anonymous_function(n))
                .map(|data| data.return_type),
            FunctionShape::AccessorMethod {
                accessor,
                enclosing,
            } => {
                if arena.kind(accessor) != Some(SyntaxKind::GetAccessorDeclaration) {
                    return None;
                }
                arena
                    .get_property_like_at(enclosing)
                    .map(|data| data.type_annotation)
            }
        };
        annotation.and_then(NodeIndex::into_option)
    }

    pub fn is_async(&self) -> bool {
        modifiers::is_async(self.modifiers())
    }
}

fn parameter_slice(arena: &NodeArena, list: NodeIndex) -> &[NodeIndex] {
    arena
        .get_parameter_list_at(list)
        .map_or(&[][..], |data| data.parameters.as_slice())
}

fn anonymous_parameters(arena: &NodeArena, node: NodeIndex) -> &[NodeIndex] {
    let kind = arena.kind(node);
    let data = arena.get(node).and_then(|n| arena.get_anonymous_function(n));
    match (kind, data) {
        (Some(SyntaxKind::SimpleLambdaExpression), Some(data)) => {
            assert!(
                data.parameter.is_some(),
                "simple lambda {node:?} has no parameter"
            );
            std::slice::from_ref(&data.parameter)
        }
        (Some(SyntaxKind::ParenthesizedLambdaExpression), Some(data)) => {
            assert!(
                data.parameters.is_some(),
                "parenthesized lambda {node:?} has no parameter list"
            );
            parameter_slice(arena, data.parameters)
        }
        (Some(SyntaxKind::AnonymousMethodExpression), Some(data)) => {
            parameter_slice(arena, data.parameters)
        }
        (kind, _) => panic!("{kind:?} at {node:?} is not an anonymous function"),
    }
}

/// The property, indexer or event whose accessor list holds `accessor`.
fn enclosing_declaration(arena: &NodeArena, accessor: NodeIndex) -> Result<NodeIndex, AdapterError> {
    let list = arena.parent_of(accessor);
    let enclosing = arena.parent_of(list);
    let found = arena.kind(list) == Some(SyntaxKind::AccessorList)
        && arena
            .kind(enclosing)
            .is_some_and(|kind| kind.is_property_like());
    if found {
        return Ok(enclosing);
    }
    debug!(
        accessor = accessor.0,
        "enclosing_declaration: accessor is not inside an accessor list"
    );
    Err(AdapterError::MissingEnclosingDeclaration { accessor })
}
