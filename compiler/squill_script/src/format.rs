//! The expression-to-script formatter.

use squill_ir::{DataType, Expr, ExprKind, FieldAttribute};

use crate::{params_builder, Params, ScriptConfig, ScriptError, ScriptTemplate};

/// Render a resolved expression as a script template.
///
/// Fields read through the engine's doc values; a string operation
/// wraps its child in the namespaced remote function named by the
/// operation's static table.
pub fn script_for(expr: &Expr, config: &ScriptConfig) -> Result<ScriptTemplate, ScriptError> {
    let (template, params) = format_expr(expr, config)?;
    let result_type = expr.data_type().unwrap_or(DataType::Null);
    ScriptTemplate::new(template, params, result_type)
}

fn format_expr(expr: &Expr, config: &ScriptConfig) -> Result<(String, Params), ScriptError> {
    match &expr.kind {
        ExprKind::Literal(value) => Ok((
            "{}".to_owned(),
            params_builder().constant(value.clone()).build(),
        )),
        ExprKind::Field(attr) => format_field(attr),
        ExprKind::UnaryString { op, child } => {
            let (child_template, params) = format_expr(child, config)?;
            let template = format!(
                "{}.{}({child_template})",
                config.namespace(),
                op.remote_name()
            );
            Ok((template, params))
        }
        ExprKind::Unresolved(name) => Err(ScriptError::UnresolvedExpression {
            name: name.clone(),
            span: expr.span,
        }),
    }
}

/// Reference a document field from a script.
///
/// An analyzed text field cannot be read exactly, so its keyword
/// sibling is substituted instead. That keeps operations working on
/// such fields at the cost of reading the normalized sibling rather
/// than the original source value; a field with no sibling is an
/// error.
fn format_field(attr: &FieldAttribute) -> Result<(String, Params), ScriptError> {
    let name = attr.exact_name()?;
    Ok((
        "doc[{}].value".to_owned(),
        params_builder().variable(name).build(),
    ))
}
