//! Manifest fields and their per-conversation state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownFieldError;
use super::slot_value::SlotValue;
use super::validator::{FieldValidation, NormalizedValue};

/// The nine fields a shipment manifest requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FreightCost,
    Description,
    Weight,
    LoadDate,
    UnloadDate,
    VehicleCard,
    License,
    Origin,
    Destination,
}

impl FieldName {
    /// All required fields, in the order they appear on the manifest.
    pub const ALL: [FieldName; 9] = [
        FieldName::FreightCost,
        FieldName::Description,
        FieldName::Weight,
        FieldName::LoadDate,
        FieldName::UnloadDate,
        FieldName::VehicleCard,
        FieldName::License,
        FieldName::Origin,
        FieldName::Destination,
    ];

    /// Returns the wire/slot name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FreightCost => "freight_cost",
            FieldName::Description => "description",
            FieldName::Weight => "weight",
            FieldName::LoadDate => "load_date",
            FieldName::UnloadDate => "unload_date",
            FieldName::VehicleCard => "vehicle_card",
            FieldName::License => "license",
            FieldName::Origin => "origin",
            FieldName::Destination => "destination",
        }
    }

    /// Human-readable label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FreightCost => "freight cost",
            FieldName::Description => "cargo description",
            FieldName::Weight => "cargo weight",
            FieldName::LoadDate => "loading date",
            FieldName::UnloadDate => "unloading date",
            FieldName::VehicleCard => "vehicle registration card",
            FieldName::License => "driver's license",
            FieldName::Origin => "origin",
            FieldName::Destination => "destination",
        }
    }

    /// Returns which normalization rule applies to this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::FreightCost => FieldKind::Currency,
            FieldName::Weight => FieldKind::Weight,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownFieldError::new(s))
    }
}

/// Normalization rule family of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer amount with optional `$` and grouping separators.
    Currency,
    /// Real number with an optional unit suffix.
    Weight,
    /// Free text, dates and identifiers; presence is the only rule.
    Text,
}

/// Lifecycle of a single field within one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Unset,
    Pending,
    Valid,
    Rejected,
}

/// One field's collected state.
///
/// The normalized value is only reachable while the status is `Valid`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: FieldName,
    raw_value: SlotValue,
    normalized_value: Option<NormalizedValue>,
    status: FieldStatus,
}

impl Field {
    /// Creates a field with nothing collected yet.
    pub fn unset(name: FieldName) -> Self {
        Self {
            name,
            raw_value: SlotValue::Empty,
            normalized_value: None,
            status: FieldStatus::Unset,
        }
    }

    pub fn name(&self) -> FieldName {
        self.name
    }

    pub fn raw_value(&self) -> &SlotValue {
        &self.raw_value
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn normalized_value(&self) -> Option<&NormalizedValue> {
        match self.status {
            FieldStatus::Valid => self.normalized_value.as_ref(),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }

    /// Records a raw value awaiting validation.
    pub fn supply(&mut self, raw: SlotValue) {
        self.raw_value = raw;
        self.normalized_value = None;
        self.status = FieldStatus::Pending;
    }

    /// Applies a validation decision to the pending raw value.
    pub fn resolve(&mut self, validation: &FieldValidation) {
        match validation {
            FieldValidation::Valid(value) => {
                self.normalized_value = Some(value.clone());
                self.status = FieldStatus::Valid;
            }
            FieldValidation::Rejected(_) => {
                self.normalized_value = None;
                self.status = FieldStatus::Rejected;
            }
        }
    }

    /// Stores an already-normalized value, e.g. one restored from host state.
    pub fn accept(&mut self, value: NormalizedValue) {
        self.raw_value = SlotValue::from(serde_json::Value::from(value.clone()));
        self.normalized_value = Some(value);
        self.status = FieldStatus::Valid;
    }

    /// Returns the field to `Unset`.
    pub fn clear(&mut self) {
        *self = Field::unset(self.name);
    }
}
