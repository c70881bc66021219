//! The completed manifest record sent for document generation.

use serde::Serialize;
use std::collections::BTreeMap;

use super::errors::ManifestError;
use super::field::FieldName;
use super::validator::NormalizedValue;

/// Every required field with its normalized value.
///
/// A record can only be built when all nine fields are present, so a partial
/// manifest can never reach the generator. Serializes as a flat JSON object
/// keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ManifestRecord {
    values: BTreeMap<FieldName, NormalizedValue>,
}

impl ManifestRecord {
    /// Builds a record, failing if any required field is absent.
    pub fn from_values(
        values: impl IntoIterator<Item = (FieldName, NormalizedValue)>,
    ) -> Result<Self, ManifestError> {
        let values: BTreeMap<_, _> = values.into_iter().collect();
        let missing: Vec<FieldName> = FieldName::ALL
            .iter()
            .copied()
            .filter(|name| !values.contains_key(name))
            .collect();

        if !missing.is_empty() {
            return Err(ManifestError::incomplete(missing));
        }

        Ok(Self { values })
    }

    pub fn get(&self, field: FieldName) -> Option<&NormalizedValue> {
        self.values.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &NormalizedValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }
}
