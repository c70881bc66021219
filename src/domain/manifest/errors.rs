//! Manifest domain errors.

use thiserror::Error;

use super::field::FieldName;

/// A field name that is not part of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown manifest field '{name}'")]
pub struct UnknownFieldError {
    pub name: String,
}

impl UnknownFieldError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors raised while assembling a manifest record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("Manifest is incomplete, missing: {}", format_fields(.missing))]
    Incomplete { missing: Vec<FieldName> },
}

impl ManifestError {
    pub fn incomplete(missing: Vec<FieldName>) -> Self {
        ManifestError::Incomplete { missing }
    }
}

fn format_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
