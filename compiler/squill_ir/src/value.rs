//! Constant and runtime values.
//!
//! `Value` is what folding produces at compile time and what processors
//! produce when evaluating locally. No floating-point values are ever
//! folded at this layer, so the enum carries full `Eq`/`Hash` — a
//! requirement of expression equality, which caching keys on.

use std::fmt;

use crate::DataType;

/// A constant or runtime scalar value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// UTF-8 string.
    Str(String),
    /// 64-bit signed integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Absent value. String operations pass it through untouched.
    Null,
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Data type of this value.
    pub const fn data_type(&self) -> DataType {
        match self {
            Value::Str(_) => DataType::Keyword,
            Value::Int(_) => DataType::Integer,
            Value::Bool(_) => DataType::Boolean,
            Value::Null => DataType::Null,
        }
    }

    /// Whether this is the null value.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Renders the value as a script literal: strings are single-quoted
/// with `\` and `'` escaped, everything else renders bare.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => {
                f.write_str("'")?;
                for c in s.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("'")
            }
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}
