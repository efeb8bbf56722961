//! The resolution pass.

use squill_ir::{Expr, ExprKind, StringOp};

use crate::TypeResolution;

/// Resolve a unary string application of `op` to `child`.
///
/// Checked in order:
/// 1. the child subtree must be structurally complete — an unbound
///    name below reports `"Unresolved children"`, not a type error;
/// 2. the child's data type must be a string type.
#[tracing::instrument(level = "trace", skip(child), fields(op = op.sql_name()))]
pub fn resolve_unary_string(op: StringOp, child: &Expr) -> TypeResolution {
    if !child.is_resolved() {
        return TypeResolution::unresolved("Unresolved children");
    }

    match child.data_type() {
        Some(ty) if ty.is_string() => TypeResolution::Resolved,
        Some(ty) => TypeResolution::unresolved(format!(
            "'{}' requires a string type, received {}",
            op.sql_name(),
            ty.sql_name()
        )),
        // is_resolved() above rules this out, but stay total.
        None => TypeResolution::unresolved("Unresolved children"),
    }
}

/// Resolve a whole expression tree bottom-up. The first failure wins.
///
/// Leaves resolve trivially; an unbound name reports itself so the
/// caller can retry once the name is bound.
#[tracing::instrument(level = "trace", skip_all)]
pub fn resolve(expr: &Expr) -> TypeResolution {
    match &expr.kind {
        ExprKind::Literal(_) | ExprKind::Field(_) => TypeResolution::Resolved,
        ExprKind::Unresolved(name) => {
            TypeResolution::unresolved(format!("Unresolved expression [{name}]"))
        }
        ExprKind::UnaryString { op, child } => {
            let below = resolve(child);
            if !below.is_resolved() {
                return below;
            }
            let here = resolve_unary_string(*op, child);
            if !here.is_resolved() {
                tracing::debug!(op = op.sql_name(), "type resolution failed");
            }
            here
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use squill_ir::{FieldAttribute, Span, Value};

    fn upper(child: Expr) -> Expr {
        Expr::unary_string(StringOp::Upper, child, Span::DUMMY)
    }

    #[test]
    fn string_field_resolves() {
        let e = upper(Expr::field(FieldAttribute::keyword("name"), Span::DUMMY));
        assert_eq!(resolve(&e), TypeResolution::Resolved);
    }

    #[test]
    fn text_field_resolves() {
        // Inexactness matters only when scripting, not for typing.
        let e = upper(Expr::field(
            FieldAttribute::text("comment", Some("comment.keyword")),
            Span::DUMMY,
        ));
        assert_eq!(resolve(&e), TypeResolution::Resolved);
    }

    #[test]
    fn integer_operand_reports_exact_message() {
        let e = upper(Expr::literal(Value::Int(3), Span::DUMMY));
        assert_eq!(
            resolve(&e).message(),
            Some("'UPPER' requires a string type, received integer")
        );
    }

    #[test]
    fn every_op_names_itself_in_the_diagnostic() {
        for op in StringOp::ALL {
            let e = Expr::unary_string(
                op,
                Expr::literal(Value::Bool(true), Span::DUMMY),
                Span::DUMMY,
            );
            let expected =
                format!("'{}' requires a string type, received boolean", op.sql_name());
            assert_eq!(resolve(&e).message(), Some(expected.as_str()));
        }
    }

    #[test]
    fn unresolved_children_reported_before_types() {
        let e = upper(Expr::unresolved("name", Span::DUMMY));
        assert_eq!(
            resolve_unary_string(StringOp::Upper, &Expr::unresolved("name", Span::DUMMY)),
            TypeResolution::unresolved("Unresolved children")
        );
        // The whole-tree pass surfaces the unbound name itself.
        assert_eq!(
            resolve(&e).message(),
            Some("Unresolved expression [name]")
        );
    }

    #[test]
    fn nested_ops_resolve_through_result_types() {
        // LOWER(UPPER(name)) - inner result is keyword, still a string.
        let e = Expr::unary_string(
            StringOp::Lower,
            upper(Expr::field(FieldAttribute::keyword("name"), Span::DUMMY)),
            Span::DUMMY,
        );
        assert_eq!(resolve(&e), TypeResolution::Resolved);
    }

    #[test]
    fn length_result_is_not_a_string_operand() {
        // UPPER(LENGTH(name)) - inner result is integer, outer fails.
        let e = upper(Expr::unary_string(
            StringOp::Length,
            Expr::field(FieldAttribute::keyword("name"), Span::DUMMY),
            Span::DUMMY,
        ));
        assert_eq!(
            resolve(&e).message(),
            Some("'UPPER' requires a string type, received integer")
        );
    }
}
