//! Squill lowering pipeline.
//!
//! Ties the stages together: a parsed expression tree is type-resolved,
//! then lowered to exactly one of three forms —
//! - a compile-time constant, when the tree folds;
//! - a processor tree, when the caller evaluates locally;
//! - a script template, when evaluation happens inside the remote
//!   engine.
//!
//! Each compilation works on its own tree and produces fresh outputs;
//! nothing here shares mutable state, so compilations can run on
//! parallel threads without coordination.

use thiserror::Error;

use squill_eval::{to_processor_definition, LowerError, ProcessorDefinition};
use squill_ir::{Expr, FoldError, Span, Value};
use squill_script::{script_for, ScriptConfig, ScriptError, ScriptTemplate};
use squill_types::resolve;

/// Where a non-constant expression will be evaluated.
#[derive(Clone, Debug)]
pub enum EvalTarget {
    /// In-process, over extracted documents.
    Local,
    /// Inside the remote engine, as a script.
    Remote(ScriptConfig),
}

/// The lowered form of one expression.
#[derive(Clone, Debug)]
pub enum Lowered {
    /// The tree folded at compile time.
    Constant(Value),
    /// A processor tree for local evaluation.
    Processor(ProcessorDefinition),
    /// A script template for remote evaluation.
    Script(ScriptTemplate),
}

/// Compilation failure.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum CompileError {
    /// Type resolution failed; `message` is the user-facing diagnostic.
    #[error("{message}")]
    Type { message: String, span: Span },

    #[error(transparent)]
    Fold(#[from] FoldError),

    #[error(transparent)]
    Lower(#[from] LowerError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Compile one expression tree.
///
/// Resolution runs first and its failures are terminal. A foldable
/// tree becomes a constant regardless of target; otherwise the target
/// decides between a processor tree and a script template.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile(expr: &Expr, target: &EvalTarget) -> Result<Lowered, CompileError> {
    let resolution = resolve(expr);
    if let Some(message) = resolution.message() {
        return Err(CompileError::Type {
            message: message.to_owned(),
            span: expr.span,
        });
    }

    if expr.foldable() {
        tracing::debug!("folded to a constant");
        return Ok(Lowered::Constant(expr.fold()?));
    }

    match target {
        EvalTarget::Local => {
            tracing::debug!("lowered to a processor tree");
            Ok(Lowered::Processor(to_processor_definition(expr)?))
        }
        EvalTarget::Remote(config) => {
            tracing::debug!("lowered to a script template");
            Ok(Lowered::Script(script_for(expr, config)?))
        }
    }
}
