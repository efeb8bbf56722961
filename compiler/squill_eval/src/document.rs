//! The document a processor tree evaluates against.

use rustc_hash::FxHashMap;

use squill_ir::Value;

/// One document's field values.
///
/// A missing field reads as null, matching how the engine's doc values
/// behave; string operations then pass the null through.
#[derive(Clone, Debug, Default)]
pub struct Document {
    fields: FxHashMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Set a field value, replacing any existing one.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Read a field, null when absent.
    pub fn field(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or(Value::Null)
    }
}
