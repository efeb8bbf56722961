//! Expression tree.
//!
//! Expressions are immutable: the parser builds them, the resolver and
//! lowering passes read them, and transformations produce new nodes.
//! A child is exclusively owned by its parent.
//!
//! # Equality
//!
//! `Eq` and `Hash` are implemented over the expression kind only.
//! Spans are excluded so that structurally identical subtrees compare
//! equal, which is what compiled-plan caches and common-subexpression
//! elimination key on. The operation tag participates in both equality
//! and hashing, so two different operations over the same child are
//! unequal and (in general) hash differently.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{DataType, FieldAttribute, FoldError, Span, StringOp, Value};

/// Expression node.
#[derive(Clone)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// A compile-time constant.
    Literal(Value),
    /// A reference to a document field.
    Field(FieldAttribute),
    /// A unary string operation applied to one operand.
    UnaryString { op: StringOp, child: Box<Expr> },
    /// An identifier not yet bound to a field. Present until the
    /// resolver has run; everything downstream rejects it.
    Unresolved(String),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// A literal constant.
    pub fn literal(value: Value, span: Span) -> Self {
        Expr::new(ExprKind::Literal(value), span)
    }

    /// A document field reference.
    pub fn field(attr: FieldAttribute, span: Span) -> Self {
        Expr::new(ExprKind::Field(attr), span)
    }

    /// A unary string operation over `child`.
    pub fn unary_string(op: StringOp, child: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::UnaryString {
                op,
                child: Box::new(child),
            },
            span,
        )
    }

    /// An identifier the resolver has not bound yet.
    pub fn unresolved(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Unresolved(name.into()), span)
    }

    /// The resolved data type, absent while the subtree still contains
    /// unresolved names.
    pub fn data_type(&self) -> Option<DataType> {
        match &self.kind {
            ExprKind::Literal(v) => Some(v.data_type()),
            ExprKind::Field(attr) => Some(attr.data_type()),
            ExprKind::UnaryString { op, child } => {
                child.data_type().map(|_| op.result_type())
            }
            ExprKind::Unresolved(_) => None,
        }
    }

    /// Structural completeness of the whole subtree: no unresolved
    /// name anywhere below (or at) this node.
    pub fn is_resolved(&self) -> bool {
        match &self.kind {
            ExprKind::Literal(_) | ExprKind::Field(_) => true,
            ExprKind::UnaryString { child, .. } => child.is_resolved(),
            ExprKind::Unresolved(_) => false,
        }
    }

    /// Whether every direct child is resolved. Distinct from
    /// [`is_resolved`](Self::is_resolved) only at an `Unresolved` node
    /// itself: a parent asks this before checking operand types.
    pub fn children_resolved(&self) -> bool {
        match &self.kind {
            ExprKind::UnaryString { child, .. } => child.is_resolved(),
            ExprKind::Literal(_) | ExprKind::Field(_) | ExprKind::Unresolved(_) => true,
        }
    }

    /// Whether the expression's value is known at compile time.
    pub fn foldable(&self) -> bool {
        match &self.kind {
            ExprKind::Literal(_) => true,
            ExprKind::UnaryString { child, .. } => child.foldable(),
            ExprKind::Field(_) | ExprKind::Unresolved(_) => false,
        }
    }

    /// Fold to a constant.
    ///
    /// Precondition: [`foldable`](Self::foldable). A child failure
    /// propagates untouched, never wrapped.
    pub fn fold(&self) -> Result<Value, FoldError> {
        match &self.kind {
            ExprKind::Literal(v) => Ok(v.clone()),
            ExprKind::UnaryString { op, child } => op.apply(&child.fold()?),
            ExprKind::Field(_) | ExprKind::Unresolved(_) => {
                Err(FoldError::NotFoldable { span: self.span })
            }
        }
    }
}

// Spans are diagnostics-only: equality and hashing cover the kind so
// structurally identical trees from different source positions are
// interchangeable cache keys.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}
