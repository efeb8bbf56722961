//! Document field attributes.
//!
//! A `FieldAttribute` names a document field together with its exactness:
//! keyword fields are directly usable from scripts, analyzed text fields
//! are not and must be read through their normalized keyword sibling
//! when one exists.

use thiserror::Error;

use crate::DataType;

/// Whether a field can be referenced exactly from a script.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Exactness {
    /// Directly queryable and sortable, no analysis in the way.
    Exact,
    /// Analyzed text field. Exact operations must go through the named
    /// keyword sibling; `None` means no such sibling is mapped.
    Inexact { exact_field: Option<String> },
}

/// An analyzed text field with no keyword sibling cannot be referenced
/// from a script.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("field [{field}] is analyzed and has no exact sub-field to use instead")]
pub struct InexactFieldError {
    pub field: String,
}

/// A reference to a document field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldAttribute {
    name: String,
    data_type: DataType,
    exactness: Exactness,
}

impl FieldAttribute {
    /// Create an attribute with explicit exactness.
    pub fn new(name: impl Into<String>, data_type: DataType, exactness: Exactness) -> Self {
        FieldAttribute {
            name: name.into(),
            data_type,
            exactness,
        }
    }

    /// An exact keyword field.
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Keyword, Exactness::Exact)
    }

    /// An analyzed text field, optionally with a keyword sibling
    /// (conventionally `<name>.keyword`).
    pub fn text(name: impl Into<String>, exact_sibling: Option<&str>) -> Self {
        Self::new(
            name,
            DataType::Text,
            Exactness::Inexact {
                exact_field: exact_sibling.map(str::to_owned),
            },
        )
    }

    /// The mapped field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's data type.
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Whether exact operations need to go through a sibling field.
    pub const fn is_inexact(&self) -> bool {
        matches!(self.exactness, Exactness::Inexact { .. })
    }

    /// The name to use for exact operations: the field itself when
    /// exact, its keyword sibling when inexact.
    pub fn exact_name(&self) -> Result<&str, InexactFieldError> {
        match &self.exactness {
            Exactness::Exact => Ok(&self.name),
            Exactness::Inexact {
                exact_field: Some(sibling),
            } => Ok(sibling),
            Exactness::Inexact { exact_field: None } => Err(InexactFieldError {
                field: self.name.clone(),
            }),
        }
    }
}
