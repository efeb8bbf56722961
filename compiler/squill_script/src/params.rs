//! Ordered script parameters.

use std::fmt;

use smallvec::SmallVec;

use squill_ir::Value;

/// One parameter bound into a script template hole.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Param {
    /// A document field reference, by name.
    Variable(String),
    /// An inline constant.
    Constant(Value),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Field names render quoted, as a doc-map key.
            Param::Variable(name) => write!(f, "'{name}'"),
            Param::Constant(value) => write!(f, "{value}"),
        }
    }
}

/// Ordered parameter list. Scripts at this layer carry one or two
/// parameters almost always, hence the inline capacity.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Params(SmallVec<[Param; 2]>);

impl Params {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }
}

/// Accumulates parameters in binding order.
#[derive(Clone, Debug, Default)]
pub struct ParamsBuilder(SmallVec<[Param; 2]>);

/// Entry point matching the original builder idiom:
/// `params_builder().variable(name).build()`.
pub fn params_builder() -> ParamsBuilder {
    ParamsBuilder::default()
}

impl ParamsBuilder {
    /// Bind a document field reference.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.0.push(Param::Variable(name.into()));
        self
    }

    /// Bind an inline constant.
    #[must_use]
    pub fn constant(mut self, value: Value) -> Self {
        self.0.push(Param::Constant(value));
        self
    }

    pub fn build(self) -> Params {
        Params(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_preserves_order() {
        let params = params_builder()
            .variable("a")
            .constant(Value::Int(1))
            .variable("b")
            .build();
        let rendered: Vec<String> = params.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["'a'", "1", "'b'"]);
    }

    #[test]
    fn empty_builder_builds_empty_params() {
        let params = params_builder().build();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }
}
