//! Runtime string operator.

use squill_ir::{StringOp, Value};

use crate::EvalError;

/// A runtime operator bound to one operation tag.
///
/// Shares its evaluation table with compile-time folding: one pure
/// function per tag, two consumers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringProcessor(StringOp);

impl StringProcessor {
    pub const fn new(op: StringOp) -> Self {
        StringProcessor(op)
    }

    /// The bound operation tag.
    pub const fn op(self) -> StringOp {
        self.0
    }

    /// Apply the operator to one input value.
    pub fn process(self, input: &Value) -> Result<Value, EvalError> {
        Ok(self.0.apply(input)?)
    }
}
