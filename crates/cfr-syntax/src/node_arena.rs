//! NodeArena creation methods (`add_*` methods).
//!
//! Trees are built bottom-up: children are added first, and each `add_*`
//! call links the children it references back to the new parent.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::{PredefinedKeyword, SyntaxKind};
use cfr_common::Span;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, kind: SyntaxKind, span: Span, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::with_data(kind, span, data_index));
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    // ============================================================================
    // Names and type syntax
    // ============================================================================

    pub fn add_identifier(&mut self, span: Span, text: impl Into<String>) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData {
            escaped_text: text.into(),
        });
        self.push_node(SyntaxKind::Identifier, span, data_index)
    }

    pub fn add_generic_name(&mut self, span: Span, data: GenericNameData) -> NodeIndex {
        let type_arguments = data.type_arguments.clone();
        let data_index = self.generic_names.len() as u32;
        self.generic_names.push(data);
        let parent = self.push_node(SyntaxKind::GenericName, span, data_index);
        self.set_parent_list(&type_arguments, parent);
        parent
    }

    /// Add a `QualifiedName` or `AliasQualifiedName` node.
    pub fn add_qualified_name(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        data: QualifiedNameData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::QualifiedName | SyntaxKind::AliasQualifiedName
        ));
        let data_index = self.qualified_names.len() as u32;
        self.qualified_names.push(data);
        let parent = self.push_node(kind, span, data_index);
        self.set_parent(data.left, parent);
        self.set_parent(data.right, parent);
        parent
    }

    pub fn add_predefined_type(&mut self, span: Span, keyword: PredefinedKeyword) -> NodeIndex {
        let data_index = self.predefined_types.len() as u32;
        self.predefined_types.push(PredefinedTypeData { keyword });
        self.push_node(SyntaxKind::PredefinedType, span, data_index)
    }

    /// Add a `NullableType`, `ArrayType` or `PointerType` node.
    pub fn add_wrapped_type(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        data: WrappedTypeData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::NullableType | SyntaxKind::ArrayType | SyntaxKind::PointerType
        ));
        let data_index = self.wrapped_types.len() as u32;
        self.wrapped_types.push(data);
        let parent = self.push_node(kind, span, data_index);
        self.set_parent(data.element_type, parent);
        parent
    }

    // ============================================================================
    // Expressions
    // ============================================================================

    /// Add a parenthesized, await, checked, unchecked, ref or throw expression.
    pub fn add_wrapped_expr(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        data: WrappedExprData,
    ) -> NodeIndex {
        debug_assert!(kind.is_wrapping_expression());
        let data_index = self.wrapped_exprs.len() as u32;
        self.wrapped_exprs.push(data);
        let parent = self.push_node(kind, span, data_index);
        self.set_parent(data.expression, parent);
        parent
    }

    pub fn add_member_access(&mut self, span: Span, data: AccessExprData) -> NodeIndex {
        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(SyntaxKind::SimpleMemberAccessExpression, span, data_index);
        self.set_parent(data.expression, parent);
        self.set_parent(data.name, parent);
        parent
    }

    pub fn add_invocation(&mut self, span: Span, data: InvocationData) -> NodeIndex {
        let expression = data.expression;
        let arguments = data.arguments.clone();
        let data_index = self.invocations.len() as u32;
        self.invocations.push(data);
        let parent = self.push_node(SyntaxKind::InvocationExpression, span, data_index);
        self.set_parent(expression, parent);
        self.set_parent_list(&arguments, parent);
        parent
    }

    pub fn add_literal(&mut self, span: Span, text: impl Into<String>) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(LiteralData { text: text.into() });
        self.push_node(SyntaxKind::LiteralExpression, span, data_index)
    }

    pub fn add_binary_expr(&mut self, span: Span, data: BinaryExprData) -> NodeIndex {
        let (left, right) = (data.left, data.right);
        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(SyntaxKind::BinaryExpression, span, data_index);
        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    // ============================================================================
    // Function-like declarations
    // ============================================================================

    /// Add a method, constructor, destructor, operator, conversion operator or
    /// local function.
    pub fn add_method_like(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        data: MethodLikeData,
    ) -> NodeIndex {
        debug_assert!(kind.is_method_like());
        let children = [
            data.return_type,
            data.name,
            data.parameters,
            data.body,
            data.expression_body,
        ];
        let data_index = self.method_likes.len() as u32;
        self.method_likes.push(data);
        let parent = self.push_node(kind, span, data_index);
        for child in children {
            self.set_parent(child, parent);
        }
        parent
    }

    /// Add a simple lambda, parenthesized lambda or anonymous method.
    pub fn add_anonymous_function(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        data: AnonymousFunctionData,
    ) -> NodeIndex {
        debug_assert!(kind.is_anonymous_function());
        let children = [
            data.return_type,
            data.parameter,
            data.parameters,
            data.body,
            data.expression_body,
        ];
        let data_index = self.anonymous_functions.len() as u32;
        self.anonymous_functions.push(data);
        let parent = self.push_node(kind, span, data_index);
        for child in children {
            self.set_parent(child, parent);
        }
        parent
    }

    /// Add a `get`, `set`, `init`, `add` or `remove` accessor.
    pub fn add_accessor(&mut self, kind: SyntaxKind, span: Span, data: AccessorData) -> NodeIndex {
        debug_assert!(kind.is_accessor());
        let (body, expression_body) = (data.body, data.expression_body);
        let data_index = self.accessors.len() as u32;
        self.accessors.push(data);
        let parent = self.push_node(kind, span, data_index);
        self.set_parent(body, parent);
        self.set_parent(expression_body, parent);
        parent
    }

    pub fn add_accessor_list(&mut self, span: Span, data: AccessorListData) -> NodeIndex {
        let accessors = data.accessors.clone();
        let data_index = self.accessor_lists.len() as u32;
        self.accessor_lists.push(data);
        let parent = self.push_node(SyntaxKind::AccessorList, span, data_index);
        self.set_parent_list(&accessors, parent);
        parent
    }

    /// Add a property, indexer or event declaration.
    pub fn add_property_like(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        data: PropertyLikeData,
    ) -> NodeIndex {
        debug_assert!(kind.is_property_like());
        let children = [
            data.type_annotation,
            data.name,
            data.parameters,
            data.accessor_list,
            data.expression_body,
        ];
        let data_index = self.property_likes.len() as u32;
        self.property_likes.push(data);
        let parent = self.push_node(kind, span, data_index);
        for child in children {
            self.set_parent(child, parent);
        }
        parent
    }

    // ============================================================================
    // Shared pieces
    // ============================================================================

    pub fn add_parameter_list(&mut self, span: Span, data: ParameterListData) -> NodeIndex {
        let parameters = data.parameters.clone();
        let data_index = self.parameter_lists.len() as u32;
        self.parameter_lists.push(data);
        let parent = self.push_node(SyntaxKind::ParameterList, span, data_index);
        self.set_parent_list(&parameters, parent);
        parent
    }

    pub fn add_parameter(&mut self, span: Span, data: ParameterData) -> NodeIndex {
        let type_annotation = data.type_annotation;
        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(SyntaxKind::Parameter, span, data_index);
        self.set_parent(type_annotation, parent);
        parent
    }

    pub fn add_block(&mut self, span: Span, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();
        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(SyntaxKind::Block, span, data_index);
        self.set_parent_list(&statements, parent);
        parent
    }

    pub fn add_arrow_clause(&mut self, span: Span, data: ArrowClauseData) -> NodeIndex {
        let data_index = self.arrow_clauses.len() as u32;
        self.arrow_clauses.push(data);
        let parent = self.push_node(SyntaxKind::ArrowExpressionClause, span, data_index);
        self.set_parent(data.expression, parent);
        parent
    }
}
