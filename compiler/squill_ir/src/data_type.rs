//! Data type identification enum.
//!
//! A single closed enum for every data type this layer can meet, used
//! for type resolution and for naming types in diagnostics. The string
//! classification drives the operand check on string functions.

use std::fmt;

/// Data type of an expression or document field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// Exact (not analyzed) string field, directly queryable and sortable.
    Keyword,
    /// Analyzed text field; exact operations need its keyword sibling.
    Text,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Boolean,
    /// Absent / null value.
    Null,
}

impl DataType {
    /// Whether this type is classified as a string type.
    ///
    /// Both exact keyword fields and analyzed text fields qualify; the
    /// exact/inexact distinction only matters once a field has to be
    /// referenced from a script.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, DataType::Keyword | DataType::Text)
    }

    /// Lowercase name used in diagnostics, e.g. `"integer"`.
    pub const fn sql_name(self) -> &'static str {
        match self {
            DataType::Keyword => "keyword",
            DataType::Text => "text",
            DataType::Integer => "integer",
            DataType::Double => "double",
            DataType::Boolean => "boolean",
            DataType::Null => "null",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_classification() {
        assert!(DataType::Keyword.is_string());
        assert!(DataType::Text.is_string());
        assert!(!DataType::Integer.is_string());
        assert!(!DataType::Boolean.is_string());
        assert!(!DataType::Null.is_string());
    }

    #[test]
    fn sql_names_are_lowercase() {
        for ty in [
            DataType::Keyword,
            DataType::Text,
            DataType::Integer,
            DataType::Double,
            DataType::Boolean,
            DataType::Null,
        ] {
            assert_eq!(ty.sql_name(), ty.sql_name().to_lowercase());
        }
    }
}
