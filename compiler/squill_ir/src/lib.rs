//! Squill IR - Expression Tree and Scalar Operation Types
//!
//! This crate contains the core data structures for the Squill lowering
//! engine:
//! - Spans for source locations
//! - Data types and runtime values
//! - Field attributes (exact vs. analyzed-text fields)
//! - The scalar string-operation enumeration with its evaluation table
//! - The immutable expression tree with constant folding
//!
//! # Design Philosophy
//!
//! - **Closed sets**: operations and data types are closed enums, so
//!   dispatch is exhaustive `match` and the remote-name table is checked
//!   at compile time.
//! - **Immutable trees**: expressions are never mutated after
//!   construction; transformations produce new nodes.
//! - **Equality for caching**: expression equality and hashing ignore
//!   spans, so structurally identical subtrees can key compiled-plan
//!   caches and feed common-subexpression elimination.

mod data_type;
mod error;
mod expr;
mod field;
mod span;
mod string_op;
mod value;

pub use data_type::DataType;
pub use error::FoldError;
pub use expr::{Expr, ExprKind};
pub use field::{Exactness, FieldAttribute, InexactFieldError};
pub use span::Span;
pub use string_op::StringOp;
pub use value::Value;
