//! End-to-end lowering tests.
//!
//! Each test builds an expression tree the way the parser would and
//! checks the full pipeline: resolution, folding, and lowering to a
//! processor tree or script template.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use squill_compiler::{compile, CompileError, EvalTarget, Lowered};
use squill_eval::Document;
use squill_ir::{DataType, Expr, FieldAttribute, Span, StringOp, Value};
use squill_script::ScriptConfig;

fn remote() -> EvalTarget {
    EvalTarget::Remote(ScriptConfig::default())
}

fn upper(child: Expr) -> Expr {
    Expr::unary_string(StringOp::Upper, child, Span::new(0, 12))
}

#[test]
fn upper_over_exact_field_scripts_directly() {
    let expr = upper(Expr::field(FieldAttribute::keyword("name"), Span::new(6, 10)));

    let Lowered::Script(script) = compile(&expr, &remote()).unwrap() else {
        panic!("expected a script");
    };
    assert_eq!(script.to_string(), "{sql}.upper(doc['name'].value)");
    assert_eq!(script.params().len(), 1);
    assert_eq!(script.first_variable(), Some("name"));
    assert_eq!(script.result_type(), DataType::Keyword);
}

#[test]
fn upper_over_inexact_field_binds_the_exact_sibling() {
    let expr = upper(Expr::field(
        FieldAttribute::text("comment", Some("comment.keyword")),
        Span::new(6, 13),
    ));

    let Lowered::Script(script) = compile(&expr, &remote()).unwrap() else {
        panic!("expected a script");
    };
    assert_eq!(script.first_variable(), Some("comment.keyword"));
    assert_eq!(script.to_string(), "{sql}.upper(doc['comment.keyword'].value)");
}

#[test]
fn integer_operand_is_a_compile_error_with_the_exact_message() {
    let expr = upper(Expr::literal(Value::Int(42), Span::new(6, 8)));

    let err = compile(&expr, &remote()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'UPPER' requires a string type, received integer"
    );
    assert!(matches!(err, CompileError::Type { span, .. } if span == Span::new(0, 12)));
}

#[test]
fn foldable_tree_becomes_a_constant_for_any_target() {
    let expr = upper(Expr::literal(Value::string("sql"), Span::DUMMY));

    for target in [remote(), EvalTarget::Local] {
        let Lowered::Constant(value) = compile(&expr, &target).unwrap() else {
            panic!("expected a constant");
        };
        assert_eq!(value, Value::string("SQL"));
    }
}

#[test]
fn null_literal_operand_is_a_type_error() {
    // Nulls pass through at runtime (see the missing-field case below),
    // but a literal null operand is rejected up front like any other
    // non-string type.
    let expr = upper(Expr::literal(Value::Null, Span::DUMMY));

    let err = compile(&expr, &remote()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'UPPER' requires a string type, received null"
    );
}

#[test]
fn local_target_lowers_to_a_processor_tree() {
    let expr = Expr::unary_string(
        StringOp::Trim,
        upper(Expr::field(FieldAttribute::keyword("name"), Span::DUMMY)),
        Span::DUMMY,
    );

    let Lowered::Processor(def) = compile(&expr, &EvalTarget::Local).unwrap() else {
        panic!("expected a processor");
    };
    let doc = Document::new().with_field("name", Value::string(" ada "));
    assert_eq!(def.process(&doc).unwrap(), Value::string("ADA"));
    // A document missing the field evaluates the op over null.
    assert_eq!(def.process(&Document::new()).unwrap(), Value::Null);
}

#[test]
fn unresolved_name_fails_then_succeeds_once_bound() {
    let span = Span::new(6, 10);
    let unbound = upper(Expr::unresolved("name", span));
    let err = compile(&unbound, &remote()).unwrap_err();
    assert_eq!(err.to_string(), "Unresolved expression [name]");

    // The resolver binds the name and re-resolution succeeds: the
    // structural failure is recoverable, not terminal.
    let bound = upper(Expr::field(FieldAttribute::keyword("name"), span));
    assert!(compile(&bound, &remote()).is_ok());
}

#[test]
fn custom_namespace_flows_through() {
    let expr = Expr::unary_string(
        StringOp::CharLength,
        Expr::field(FieldAttribute::keyword("name"), Span::DUMMY),
        Span::DUMMY,
    );

    let target = EvalTarget::Remote(ScriptConfig::new("StringUtils"));
    let Lowered::Script(script) = compile(&expr, &target).unwrap() else {
        panic!("expected a script");
    };
    assert_eq!(script.to_string(), "StringUtils.charLength(doc['name'].value)");
    assert_eq!(script.result_type(), DataType::Integer);
}

#[test]
fn inexact_field_without_sibling_fails_only_when_scripted() {
    let expr = upper(Expr::field(FieldAttribute::text("comment", None), Span::DUMMY));

    // Locally the raw field value can be read, so lowering succeeds.
    assert!(matches!(
        compile(&expr, &EvalTarget::Local),
        Ok(Lowered::Processor(_))
    ));
    // Remotely there is nothing exact to reference.
    assert!(matches!(
        compile(&expr, &remote()),
        Err(CompileError::Script(_))
    ));
}

#[test]
fn equal_trees_compile_to_equal_scripts() {
    // Plan caches key on expression equality, which ignores spans.
    let a = upper(Expr::field(FieldAttribute::keyword("name"), Span::new(6, 10)));
    let b = upper(Expr::field(FieldAttribute::keyword("name"), Span::new(80, 84)));
    assert_eq!(a, b);

    let (Lowered::Script(sa), Lowered::Script(sb)) = (
        compile(&a, &remote()).unwrap(),
        compile(&b, &remote()).unwrap(),
    ) else {
        panic!("expected scripts");
    };
    assert_eq!(sa, sb);
}
