//! Result types and target symbols of expressions.
//!
//! Both queries walk a fixed fallback chain and report absence instead of
//! failing. Resolution never invents a symbol: every answer is read from the
//! expression's own bound symbol, member group or operation tree.

use crate::options::{ResolutionAccuracy, TypeFormation};
use crate::query::SemanticQuery;
use cfr_common::limits::MAX_OPERATION_UNWRAP_DEPTH;
use cfr_semantic::{OperationId, OperationKind, SemanticModel, SymbolId, TypeId};
use cfr_syntax::NodeIndex;
use tracing::{debug, trace};

impl<'a> SemanticQuery<'a> {
    // =========================================================================
    // Result type
    // =========================================================================

    /// Static result type of `expression` using the configured formation.
    pub fn result_type(&self, expression: NodeIndex) -> Option<TypeId> {
        self.result_type_with(expression, self.options().formation)
    }

    /// Static result type of `expression`.
    ///
    /// 1. The declared or converted type, per `formation`.
    /// 2. Failing that, the type of the node's operation (unless it is the
    ///    no-op placeholder), or `object` when the operation has no type.
    /// 3. A type parameter named by a simple name is narrowed through
    ///    [`specialize`](SemanticQuery::specialize).
    pub fn result_type_with(
        &self,
        expression: NodeIndex,
        formation: TypeFormation,
    ) -> Option<TypeId> {
        let model = self.model();
        let info = model.type_info(expression);
        let selected = match formation {
            TypeFormation::WithoutConversion => info.declared,
            TypeFormation::PossiblyConverted => info.converted,
        };
        let selected = selected.or_else(|| self.operation_result_type(expression))?;

        let is_type_parameter = model
            .type_data(selected)
            .is_some_and(|data| data.is_type_parameter());
        let is_simple_name = self
            .arena()
            .kind(expression)
            .is_some_and(|kind| kind.is_simple_name());
        if is_type_parameter && is_simple_name {
            return Some(self.specialize(selected, expression));
        }
        Some(selected)
    }

    fn operation_result_type(&self, expression: NodeIndex) -> Option<TypeId> {
        let model = self.model();
        let operation = model.operation(expression)?;
        let data = model.operation_data(operation)?;
        if data.kind.is_none_sentinel() {
            return None;
        }
        trace!(
            expression = expression.0,
            operation = operation.0,
            "result_type: falling back to operation type"
        );
        Some(data.ty.unwrap_or_else(|| model.object_type()))
    }

    // =========================================================================
    // Resolved symbol
    // =========================================================================

    /// Symbol `expression` designates, using the configured accuracy.
    pub fn resolved_symbol(&self, expression: NodeIndex) -> Option<SymbolId> {
        self.resolved_symbol_with(expression, self.options().accuracy)
    }

    /// Symbol `expression` designates.
    ///
    /// 1. The symbol bound to the node.
    /// 2. The first candidate of its member group.
    /// 3. The target of its operation: [`immediate_target`] for
    ///    [`Exact`](ResolutionAccuracy::Exact), [`deep_target`] for
    ///    [`Approximate`](ResolutionAccuracy::Approximate).
    pub fn resolved_symbol_with(
        &self,
        expression: NodeIndex,
        accuracy: ResolutionAccuracy,
    ) -> Option<SymbolId> {
        let model = self.model();
        if let Some(symbol) = model.symbol_info(expression) {
            trace!(
                expression = expression.0,
                symbol = symbol.0,
                "resolved_symbol: bound symbol"
            );
            return Some(symbol);
        }

        if let Some(&first) = model.member_group(expression).first() {
            trace!(
                expression = expression.0,
                symbol = first.0,
                "resolved_symbol: first member group candidate"
            );
            return Some(first);
        }

        let operation = model.operation(expression)?;
        let target = match accuracy {
            ResolutionAccuracy::Exact => immediate_target(model, operation),
            ResolutionAccuracy::Approximate => deep_target(model, operation),
        };
        trace!(
            expression = expression.0,
            operation = operation.0,
            ?accuracy,
            found = target.is_some(),
            "resolved_symbol: operation target"
        );
        target
    }

    /// [`resolved_symbol_with`](SemanticQuery::resolved_symbol_with) on the
    /// stripped expression: `(await (x))` resolves like `x`.
    pub fn ultimate_symbol(
        &self,
        expression: NodeIndex,
        accuracy: ResolutionAccuracy,
    ) -> Option<SymbolId> {
        self.resolved_symbol_with(self.strip(expression), accuracy)
    }
}

// =============================================================================
// Operation targets
// =============================================================================

/// Symbol carried directly by a reference operation.
///
/// Indirections and every other operation yield `None`.
pub fn immediate_target(model: &dyn SemanticModel, operation: OperationId) -> Option<SymbolId> {
    let data = model.operation_data(operation)?;
    match data.kind {
        OperationKind::AnonymousFunction { symbol } => Some(symbol),
        OperationKind::FieldReference { field } => Some(field),
        OperationKind::EventReference { event } => Some(event),
        OperationKind::LocalReference { local } => Some(local),
        OperationKind::LocalFunction { symbol } => Some(symbol),
        OperationKind::Invocation { target_method } => Some(target_method),
        OperationKind::MemberReference { member } => Some(member),
        OperationKind::MethodReference { method } => Some(method),
        OperationKind::ParameterReference { parameter } => Some(parameter),
        OperationKind::PropertyReference { property } => Some(property),
        OperationKind::None
        | OperationKind::AddressOf { .. }
        | OperationKind::ArrayElementReference { .. }
        | OperationKind::Conversion { .. }
        | OperationKind::DelegateCreation { .. }
        | OperationKind::Unary { .. }
        | OperationKind::DynamicIndexerAccess { .. }
        | OperationKind::Literal
        | OperationKind::Binary { .. } => None,
    }
}

/// Like [`immediate_target`], but descends through indirections
/// (address-of, array element, conversion, delegate creation, unary, dynamic
/// indexer) until a reference is found.
pub fn deep_target(model: &dyn SemanticModel, operation: OperationId) -> Option<SymbolId> {
    let mut current = operation;
    for _ in 0..MAX_OPERATION_UNWRAP_DEPTH {
        if let Some(symbol) = immediate_target(model, current) {
            return Some(symbol);
        }
        current = model.operation_data(current)?.kind.wrapped_operation()?;
    }
    debug!(
        operation = operation.0,
        "deep_target: indirection limit reached"
    );
    None
}
