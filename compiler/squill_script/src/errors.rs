//! Script formatting errors.

use thiserror::Error;

use squill_ir::{InexactFieldError, Span};

/// Failure while rendering an expression as a script template.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ScriptError {
    /// An analyzed text field with no keyword sibling cannot be read
    /// from a script.
    #[error(transparent)]
    NoExactField(#[from] InexactFieldError),

    /// The tree was never resolved.
    #[error("cannot script unresolved expression [{name}] at {span:?}")]
    UnresolvedExpression { name: String, span: Span },

    /// Template holes and parameter bindings disagree. The formatter
    /// is a closed pipeline, so this indicates a bug in it, not bad
    /// user input.
    #[error("template has {holes} parameter hole(s) but {params} binding(s): {template}")]
    MismatchedParams {
        template: String,
        holes: usize,
        params: usize,
    },
}
