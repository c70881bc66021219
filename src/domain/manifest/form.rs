//! Per-conversation collection state.

use serde_json::{Map, Value};

use super::directive::HostDirective;
use super::errors::ManifestError;
use super::field::{Field, FieldName, FieldStatus};
use super::record::ManifestRecord;
use super::slot_value::SlotValue;
use super::validator::{validate_field, FieldValidation};

/// The fields collected so far in one conversation.
///
/// Owned by the host's conversation context and passed to the core per call.
/// Starts with every field unset and returns there after each submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestForm {
    fields: Vec<Field>,
}

impl Default for ManifestForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestForm {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.iter().copied().map(Field::unset).collect(),
        }
    }

    /// Rebuilds a form from host slot values, validating each required slot
    /// that carries a value. Unknown slots are ignored.
    pub fn from_slots(slots: &Map<String, Value>) -> Self {
        let mut form = Self::new();
        for name in FieldName::ALL {
            let raw = SlotValue::from(slots.get(name.as_str()).cloned());
            if !raw.is_empty() {
                form.supply(name, raw);
            }
        }
        form
    }

    pub fn field(&self, name: FieldName) -> &Field {
        &self.fields[Self::index(name)]
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Validates `raw` for `name` and records the decision.
    pub fn supply(&mut self, name: FieldName, raw: SlotValue) -> FieldValidation {
        let validation = validate_field(name, &raw);
        let field = &mut self.fields[Self::index(name)];
        field.supply(raw);
        field.resolve(&validation);
        validation
    }

    /// Applies a directive returned by the core.
    pub fn apply(&mut self, directive: &HostDirective) {
        match directive {
            HostDirective::SetField {
                field,
                value: Some(value),
            } => self.fields[Self::index(*field)].accept(value.clone()),
            HostDirective::SetField { field, value: None } => {
                self.fields[Self::index(*field)].clear()
            }
            HostDirective::ResetAllFields => self.reset(),
        }
    }

    /// Fields that are not yet valid, in manifest order.
    pub fn missing_fields(&self) -> Vec<FieldName> {
        self.fields
            .iter()
            .filter(|field| !field.is_valid())
            .map(Field::name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    pub fn is_empty(&self) -> bool {
        self.fields
            .iter()
            .all(|field| field.status() == FieldStatus::Unset)
    }

    /// Assembles the record for submission.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Incomplete` when any field is not valid.
    pub fn to_record(&self) -> Result<ManifestRecord, ManifestError> {
        if !self.is_complete() {
            return Err(ManifestError::incomplete(self.missing_fields()));
        }

        ManifestRecord::from_values(self.fields.iter().filter_map(|field| {
            field
                .normalized_value()
                .map(|value| (field.name(), value.clone()))
        }))
    }

    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::clear);
    }

    fn index(name: FieldName) -> usize {
        name as usize
    }
}
