//! The processor-definition tree and its construction.

use squill_ir::{Expr, ExprKind, Span, Value};

use crate::{Document, EvalError, LowerError, StringProcessor};

/// A node in the evaluation-only tree.
///
/// Built from a resolved expression tree and independent of it
/// afterwards; the span is kept for diagnostics only.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ProcessorDefinition {
    /// A constant, produced as-is for every document.
    Constant { span: Span, value: Value },
    /// Reads one field from the incoming document.
    FieldExtract { span: Span, field: String },
    /// Applies a runtime operator to the child's output.
    Unary {
        span: Span,
        child: Box<ProcessorDefinition>,
        processor: StringProcessor,
    },
}

impl ProcessorDefinition {
    /// Evaluate against one document.
    pub fn process(&self, doc: &Document) -> Result<Value, EvalError> {
        match self {
            ProcessorDefinition::Constant { value, .. } => Ok(value.clone()),
            ProcessorDefinition::FieldExtract { field, .. } => Ok(doc.field(field)),
            ProcessorDefinition::Unary {
                child, processor, ..
            } => processor.process(&child.process(doc)?),
        }
    }

    /// The span of the expression this node was built from.
    pub const fn span(&self) -> Span {
        match self {
            ProcessorDefinition::Constant { span, .. }
            | ProcessorDefinition::FieldExtract { span, .. }
            | ProcessorDefinition::Unary { span, .. } => *span,
        }
    }
}

/// Convert a resolved expression tree into a processor tree.
///
/// Pure and total over resolved input; an unresolved name means the
/// resolver was skipped and is the only error.
pub fn to_processor_definition(expr: &Expr) -> Result<ProcessorDefinition, LowerError> {
    match &expr.kind {
        ExprKind::Literal(value) => Ok(ProcessorDefinition::Constant {
            span: expr.span,
            value: value.clone(),
        }),
        ExprKind::Field(attr) => Ok(ProcessorDefinition::FieldExtract {
            span: expr.span,
            field: attr.name().to_owned(),
        }),
        ExprKind::UnaryString { op, child } => Ok(ProcessorDefinition::Unary {
            span: expr.span,
            child: Box::new(to_processor_definition(child)?),
            processor: StringProcessor::new(*op),
        }),
        ExprKind::Unresolved(name) => Err(LowerError::UnresolvedExpression {
            name: name.clone(),
            span: expr.span,
        }),
    }
}
