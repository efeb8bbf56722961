//! Folding errors.

use thiserror::Error;

use crate::{DataType, Span, StringOp};

/// Failure while folding an expression to a constant.
///
/// Type resolution runs before folding, so both variants indicate a
/// caller that skipped resolution or ignored `foldable()`. They are
/// still surfaced as values, not panics; child failures propagate
/// through `fold()` untouched.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum FoldError {
    /// `fold()` called on an expression that is not compile-time
    /// constant.
    #[error("expression at {span:?} is not foldable")]
    NotFoldable { span: Span },

    /// A string operation was applied to a non-string value.
    #[error("'{op}' cannot operate on a non-string value of type [{}]", actual.sql_name())]
    NotAString { op: StringOp, actual: DataType },
}
