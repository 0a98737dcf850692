//! Does a function's return form mean "no value"?
//!
//! A function returns nothing when its return type is `void`, or when it is
//! `async` and returns the non-generic `Task`. With a semantic model the answer
//! is read from the resolved type; without one, from the annotation's text.

use crate::full_name::is_non_generic_task;
use crate::function_like::{FunctionLike, FunctionShape};
use crate::options::TypeFormation;
use crate::query::SemanticQuery;
use cfr_semantic::{SemanticModel, TypeId};
use cfr_syntax::{NodeArena, NodeIndex, PredefinedKeyword, SyntaxKind};
use tracing::trace;

/// Source spellings of the non-generic task type recognized without a model.
pub const TASK_SPELLINGS: [&str; 4] = [
    "Task",
    "Tasks.Task",
    "System.Threading.Tasks.Task",
    "global::System.Threading.Tasks.Task",
];

/// A return type, either already resolved or still as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnForm {
    Type(TypeId),
    /// Annotation node; `NodeIndex::NONE` when the declaration has none.
    Annotation(NodeIndex),
}

/// Is `ty` `void`, or (for async functions) the non-generic `Task`?
pub fn type_implies_void(model: &dyn SemanticModel, ty: TypeId, is_async: bool) -> bool {
    if model.type_data(ty).is_some_and(|data| data.is_void()) {
        return true;
    }
    is_async && is_non_generic_task(model, ty)
}

/// Classify a return annotation from its syntax alone.
///
/// A missing annotation or the `void` keyword implies void. For async
/// functions one of [`TASK_SPELLINGS`] does too; aliases and `using` imports
/// are not followed.
pub fn syntactic_return_type_implies_void(
    arena: &NodeArena,
    annotation: NodeIndex,
    is_async: bool,
) -> bool {
    let Some(node) = arena.get(annotation) else {
        return true;
    };
    if node.kind == SyntaxKind::PredefinedType {
        return arena
            .get_predefined_type(node)
            .is_some_and(|data| data.keyword == PredefinedKeyword::Void);
    }
    if !is_async {
        return false;
    }
    arena
        .type_text(annotation)
        .is_some_and(|text| TASK_SPELLINGS.contains(&text.as_str()))
}

/// Classify `form`, semantically when `model` is given.
///
/// # Panics
///
/// A [`ReturnForm::Type`] can only be classified with a model.
pub fn implies_void(
    arena: &NodeArena,
    form: ReturnForm,
    is_async: bool,
    model: Option<&dyn SemanticModel>,
) -> bool {
    match (form, model) {
        (ReturnForm::Type(ty), Some(model)) => type_implies_void(model, ty, is_async),
        (ReturnForm::Type(ty), None) => {
            panic!("resolved return type {ty:?} classified without a semantic model")
        }
        (ReturnForm::Annotation(annotation), Some(model)) => {
            SemanticQuery::new(arena, model).return_type_implies_void(annotation, is_async)
        }
        (ReturnForm::Annotation(annotation), None) => {
            syntactic_return_type_implies_void(arena, annotation, is_async)
        }
    }
}

impl<'a> SemanticQuery<'a> {
    /// Semantic classification of a return annotation.
    ///
    /// A missing annotation implies void. An annotation the model cannot type
    /// does not.
    pub fn return_type_implies_void(&self, annotation: NodeIndex, is_async: bool) -> bool {
        if annotation.is_none() {
            return true;
        }
        match self.result_type_with(annotation, TypeFormation::PossiblyConverted) {
            Some(ty) => type_implies_void(self.model(), ty, is_async),
            None => {
                trace!(
                    annotation = annotation.0,
                    "return_type_implies_void: annotation has no type"
                );
                false
            }
        }
    }

    /// Does `function` return no value?
    ///
    /// Lambdas without an explicit return type are classified by the return
    /// type of the symbol bound to the lambda, when the model has one.
    pub fn function_implies_void(&self, function: &FunctionLike<'_>) -> bool {
        let is_async = function.is_async();
        let annotation = function.return_type();
        if let (FunctionShape::AnonymousFunction(node), None) = (function.shape(), annotation) {
            let inferred = self
                .model()
                .symbol_info(node)
                .and_then(|symbol| self.model().symbol(symbol))
                .and_then(|symbol| symbol.value_type);
            if let Some(ty) = inferred {
                return type_implies_void(self.model(), ty, is_async);
            }
        }
        self.return_type_implies_void(annotation.unwrap_or(NodeIndex::NONE), is_async)
    }
}
