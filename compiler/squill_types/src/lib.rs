//! Squill type resolution.
//!
//! Validates that an expression tree is well-formed before it is
//! folded or lowered. Resolution outcomes are values, never errors:
//! a [`TypeResolution`] is either resolved or carries the diagnostic
//! the user sees.
//!
//! Two failure families exist and are deliberately distinct:
//! - structural incompleteness (`"Unresolved children"`) — the tree
//!   still contains unbound names; recoverable, retried after the
//!   dependent subtrees resolve;
//! - type mismatch — terminal for the expression, reported with the
//!   operation name and the operand's actual type.

mod check;
mod resolution;

pub use check::{resolve, resolve_unary_string};
pub use resolution::TypeResolution;
