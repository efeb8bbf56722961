//! Squill local evaluation.
//!
//! When an expression cannot be folded and does not need to run inside
//! the remote engine, it is lowered to a [`ProcessorDefinition`]: a
//! second, evaluation-only tree decoupled from the syntax tree. The
//! processor tree owns its children, keeps no back-reference to the
//! expression it came from beyond a span for diagnostics, and
//! evaluates against one document at a time.

mod definition;
mod document;
mod errors;
mod processor;

pub use definition::{to_processor_definition, ProcessorDefinition};
pub use document::Document;
pub use errors::{EvalError, LowerError};
pub use processor::StringProcessor;
