//! NodeArena access methods: typed getters, parent lookup and text rendering.

use crate::base::NodeIndex;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use cfr_common::limits::MAX_TYPE_TEXT_NODES;
use tracing::debug;

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    /// Syntactic parent, `NodeIndex::NONE` for roots and unknown indices.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    // =========================================================================
    // Typed data getters
    // =========================================================================

    /// Get identifier data.
    /// Returns None if node is not an identifier.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_generic_name(&self, node: &Node) -> Option<&GenericNameData> {
        if node.has_data() && node.kind == SyntaxKind::GenericName {
            self.generic_names.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get qualified name data (`A.B` or `alias::B`).
    #[inline]
    pub fn get_qualified_name(&self, node: &Node) -> Option<&QualifiedNameData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::QualifiedName | SyntaxKind::AliasQualifiedName
            )
        {
            self.qualified_names.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_predefined_type(&self, node: &Node) -> Option<&PredefinedTypeData> {
        if node.has_data() && node.kind == SyntaxKind::PredefinedType {
            self.predefined_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get nullable/array/pointer type data.
    #[inline]
    pub fn get_wrapped_type(&self, node: &Node) -> Option<&WrappedTypeData> {
        if node.has_data()
            && matches!(
                node.kind,
                SyntaxKind::NullableType | SyntaxKind::ArrayType | SyntaxKind::PointerType
            )
        {
            self.wrapped_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get data for parenthesized/await/checked/unchecked/ref/throw expressions.
    #[inline]
    pub fn get_wrapped_expr(&self, node: &Node) -> Option<&WrappedExprData> {
        if node.has_data() && node.kind.is_wrapping_expression() {
            self.wrapped_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        if node.has_data() && node.kind == SyntaxKind::SimpleMemberAccessExpression {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get method-like data (methods, constructors, operators, local functions).
    #[inline]
    pub fn get_method_like(&self, node: &Node) -> Option<&MethodLikeData> {
        if node.has_data() && node.kind.is_method_like() {
            self.method_likes.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_anonymous_function(&self, node: &Node) -> Option<&AnonymousFunctionData> {
        if node.has_data() && node.kind.is_anonymous_function() {
            self.anonymous_functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_accessor(&self, node: &Node) -> Option<&AccessorData> {
        if node.has_data() && node.kind.is_accessor() {
            self.accessors.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get property/indexer/event declaration data.
    #[inline]
    pub fn get_property_like(&self, node: &Node) -> Option<&PropertyLikeData> {
        if node.has_data() && node.kind.is_property_like() {
            self.property_likes.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parameter_list(&self, node: &Node) -> Option<&ParameterListData> {
        if node.has_data() && node.kind == SyntaxKind::ParameterList {
            self.parameter_lists.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_arrow_clause(&self, node: &Node) -> Option<&ArrowClauseData> {
        if node.has_data() && node.kind == SyntaxKind::ArrowExpressionClause {
            self.arrow_clauses.get(node.data_index as usize)
        } else {
            None
        }
    }

    // =========================================================================
    // Index-based convenience getters
    // =========================================================================

    #[inline]
    pub fn get_access_expr_at(&self, index: NodeIndex) -> Option<&AccessExprData> {
        self.get_access_expr(self.get(index)?)
    }

    #[inline]
    pub fn get_parameter_list_at(&self, index: NodeIndex) -> Option<&ParameterListData> {
        self.get_parameter_list(self.get(index)?)
    }

    #[inline]
    pub fn get_property_like_at(&self, index: NodeIndex) -> Option<&PropertyLikeData> {
        self.get_property_like(self.get(index)?)
    }

    /// Name text of a simple name: the identifier itself, or the identifier
    /// part of a generic name (`Foo` for `Foo<int>`).
    pub fn simple_name_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        match node.kind {
            SyntaxKind::Identifier => self
                .get_identifier(node)
                .map(|data| data.escaped_text.as_str()),
            SyntaxKind::GenericName => self
                .get_generic_name(node)
                .map(|data| data.identifier.as_str()),
            _ => None,
        }
    }

    /// Expression carried by an `ArrowExpressionClause`, or `NONE`.
    pub fn arrow_clause_expression(&self, index: NodeIndex) -> NodeIndex {
        self.get(index)
            .and_then(|node| self.get_arrow_clause(node))
            .map_or(NodeIndex::NONE, |clause| clause.expression)
    }

    // =========================================================================
    // Type text
    // =========================================================================

    /// Render a type-syntax node the way it is spelled in source, without
    /// trivia: `Task`, `System.Threading.Tasks.Task`, `global::System.Int32`,
    /// `Task<string>`, `int?`, `byte[]`.
    ///
    /// Returns `None` for non-type nodes, and for type syntax nested deeper
    /// than [`MAX_TYPE_TEXT_NODES`] allows.
    pub fn type_text(&self, index: NodeIndex) -> Option<String> {
        let mut out = String::new();
        let mut pending = vec![TypeTextPiece::Node(index)];
        let mut visited = 0u32;
        while let Some(piece) = pending.pop() {
            let index = match piece {
                TypeTextPiece::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                TypeTextPiece::Node(index) => index,
            };
            visited += 1;
            if visited > MAX_TYPE_TEXT_NODES {
                debug!(
                    node = index.0,
                    visited, "type_text: type syntax limit reached"
                );
                return None;
            }
            let node = self.get(index)?;
            match node.kind {
                SyntaxKind::Identifier => {
                    out.push_str(&self.get_identifier(node)?.escaped_text);
                }
                SyntaxKind::GenericName => {
                    let data = self.get_generic_name(node)?;
                    out.push_str(&data.identifier);
                    out.push('<');
                    pending.push(TypeTextPiece::Text(">"));
                    for (i, &arg) in data.type_arguments.nodes.iter().enumerate().rev() {
                        pending.push(TypeTextPiece::Node(arg));
                        if i > 0 {
                            pending.push(TypeTextPiece::Text(", "));
                        }
                    }
                }
                SyntaxKind::QualifiedName | SyntaxKind::AliasQualifiedName => {
                    let data = self.get_qualified_name(node)?;
                    let separator = if node.kind == SyntaxKind::AliasQualifiedName {
                        "::"
                    } else {
                        "."
                    };
                    pending.push(TypeTextPiece::Node(data.right));
                    pending.push(TypeTextPiece::Text(separator));
                    pending.push(TypeTextPiece::Node(data.left));
                }
                SyntaxKind::PredefinedType => {
                    out.push_str(self.get_predefined_type(node)?.keyword.as_str());
                }
                SyntaxKind::NullableType | SyntaxKind::ArrayType | SyntaxKind::PointerType => {
                    let data = self.get_wrapped_type(node)?;
                    pending.push(TypeTextPiece::Text(match node.kind {
                        SyntaxKind::NullableType => "?",
                        SyntaxKind::ArrayType => "[]",
                        _ => "*",
                    }));
                    pending.push(TypeTextPiece::Node(data.element_type));
                }
                _ => return None,
            }
        }
        Some(out)
    }
}

/// Work item for [`NodeArena::type_text`]: a node still to render, or literal
/// punctuation to emit once the nodes pushed after it are done.
enum TypeTextPiece {
    Node(NodeIndex),
    Text(&'static str),
}
