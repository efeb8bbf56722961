//! Lowering and evaluation errors.

use thiserror::Error;

use squill_ir::{FoldError, Span};

/// Failure converting an expression tree into a processor tree.
///
/// Conversion is total over resolved trees; the only failure is being
/// handed a tree the resolver never saw.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum LowerError {
    #[error("cannot build a processor for unresolved expression [{name}] at {span:?}")]
    UnresolvedExpression { name: String, span: Span },
}

/// Failure while evaluating a processor tree against a document.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum EvalError {
    /// An operator rejected its input. Carries the operator's own
    /// error untouched.
    #[error(transparent)]
    Operation(#[from] FoldError),
}
