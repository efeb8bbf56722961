//! The script template triple.

use std::fmt;

use squill_ir::DataType;

use crate::{Param, Params, ScriptError};

/// Marks a parameter hole in a stored template.
const HOLE: &str = "{}";

/// A rendered expression: template text with `{}` holes, the ordered
/// parameters bound to them, and the result type. Immutable; built
/// fresh per compilation.
///
/// `Display` substitutes each hole with its parameter's script
/// rendering, producing the final snippet.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScriptTemplate {
    template: String,
    params: Params,
    result_type: DataType,
}

impl ScriptTemplate {
    /// Pair a template with its bindings.
    ///
    /// The hole count must match the parameter count; a mismatch is a
    /// formatter bug, surfaced as an error rather than a panic.
    pub fn new(
        template: impl Into<String>,
        params: Params,
        result_type: DataType,
    ) -> Result<Self, ScriptError> {
        let template = template.into();
        let holes = template.matches(HOLE).count();
        if holes != params.len() {
            return Err(ScriptError::MismatchedParams {
                holes,
                params: params.len(),
                template,
            });
        }
        Ok(ScriptTemplate {
            template,
            params,
            result_type,
        })
    }

    /// The raw template, holes unsubstituted.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub const fn result_type(&self) -> DataType {
        self.result_type
    }

    /// First variable parameter, if any. Convenient for tests and for
    /// callers that need the single field a simple script reads.
    pub fn first_variable(&self) -> Option<&str> {
        self.params.iter().find_map(|p| match p {
            Param::Variable(name) => Some(name.as_str()),
            Param::Constant(_) => None,
        })
    }
}

impl fmt::Display for ScriptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.template.as_str();
        for param in self.params.iter() {
            // new() checked the counts, so the hole is present.
            let Some(idx) = rest.find(HOLE) else { break };
            f.write_str(&rest[..idx])?;
            write!(f, "{param}")?;
            rest = &rest[idx + HOLE.len()..];
        }
        f.write_str(rest)
    }
}
