//! The closed string-operation enumeration.
//!
//! One enum replaces a class hierarchy: each tag carries its canonical
//! SQL name, its remote script function name, its result type, and its
//! pure evaluation function, all as exhaustive `match` tables checked
//! at compile time. The operation set is fixed (not user-extensible),
//! so enum dispatch is preferred over trait objects.

use std::fmt;

use crate::{DataType, FoldError, Value};

/// A unary scalar string operation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StringOp {
    /// Unicode uppercase.
    Upper,
    /// Unicode lowercase.
    Lower,
    /// Strip leading and trailing spaces and tabs.
    Trim,
    /// Strip leading spaces and tabs.
    LTrim,
    /// Strip trailing spaces and tabs.
    RTrim,
    /// Character count, ignoring trailing whitespace (SQL `LENGTH`).
    Length,
    /// Plain character count.
    CharLength,
    /// Eight times the UTF-8 byte count.
    BitLength,
    /// Code point of the first character; null for the empty string.
    Ascii,
}

impl StringOp {
    /// Every operation, in declaration order. Used for table-driven
    /// tests over the closed set.
    pub const ALL: [StringOp; 9] = [
        StringOp::Upper,
        StringOp::Lower,
        StringOp::Trim,
        StringOp::LTrim,
        StringOp::RTrim,
        StringOp::Length,
        StringOp::CharLength,
        StringOp::BitLength,
        StringOp::Ascii,
    ];

    /// Canonical SQL tag, e.g. `"CHAR_LENGTH"`. Used in diagnostics.
    pub const fn sql_name(self) -> &'static str {
        match self {
            StringOp::Upper => "UPPER",
            StringOp::Lower => "LOWER",
            StringOp::Trim => "TRIM",
            StringOp::LTrim => "LTRIM",
            StringOp::RTrim => "RTRIM",
            StringOp::Length => "LENGTH",
            StringOp::CharLength => "CHAR_LENGTH",
            StringOp::BitLength => "BIT_LENGTH",
            StringOp::Ascii => "ASCII",
        }
    }

    /// Remote script function name, e.g. `"charLength"`.
    ///
    /// A static table rather than a runtime case transform: the set is
    /// closed, so the mapping is checked when this crate compiles and
    /// stays injective by inspection (see `from_remote_name`).
    pub const fn remote_name(self) -> &'static str {
        match self {
            StringOp::Upper => "upper",
            StringOp::Lower => "lower",
            StringOp::Trim => "trim",
            StringOp::LTrim => "ltrim",
            StringOp::RTrim => "rtrim",
            StringOp::Length => "length",
            StringOp::CharLength => "charLength",
            StringOp::BitLength => "bitLength",
            StringOp::Ascii => "ascii",
        }
    }

    /// Inverse of [`remote_name`](Self::remote_name).
    pub fn from_remote_name(name: &str) -> Option<StringOp> {
        StringOp::ALL.into_iter().find(|op| op.remote_name() == name)
    }

    /// Data type the operation produces.
    pub const fn result_type(self) -> DataType {
        match self {
            StringOp::Upper
            | StringOp::Lower
            | StringOp::Trim
            | StringOp::LTrim
            | StringOp::RTrim => DataType::Keyword,
            StringOp::Length | StringOp::CharLength | StringOp::BitLength | StringOp::Ascii => {
                DataType::Integer
            }
        }
    }

    /// Apply the operation to a value.
    ///
    /// Null passes through as null. A non-string, non-null input is a
    /// programming error here: the type resolver rejects such trees
    /// before anything folds or evaluates them.
    pub fn apply(self, value: &Value) -> Result<Value, FoldError> {
        let s = match value {
            Value::Null => return Ok(Value::Null),
            Value::Str(s) => s.as_str(),
            other => return Err(not_a_string(self, other)),
        };
        Ok(match self {
            StringOp::Upper => Value::Str(s.to_uppercase()),
            StringOp::Lower => Value::Str(s.to_lowercase()),
            StringOp::Trim => Value::Str(s.trim_matches([' ', '\t']).to_owned()),
            StringOp::LTrim => Value::Str(s.trim_start_matches([' ', '\t']).to_owned()),
            StringOp::RTrim => Value::Str(s.trim_end_matches([' ', '\t']).to_owned()),
            StringOp::Length => int_len(s.trim_end().chars().count()),
            StringOp::CharLength => int_len(s.chars().count()),
            StringOp::BitLength => int_len(s.len() * 8),
            StringOp::Ascii => match s.chars().next() {
                Some(c) => Value::Int(i64::from(u32::from(c))),
                None => Value::Null,
            },
        })
    }
}

fn int_len(n: usize) -> Value {
    // Lengths of in-memory strings always fit.
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

#[cold]
fn not_a_string(op: StringOp, value: &Value) -> FoldError {
    FoldError::NotAString {
        op,
        actual: value.data_type(),
    }
}

impl fmt::Display for StringOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}
