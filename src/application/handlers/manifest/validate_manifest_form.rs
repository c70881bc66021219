//! ValidateManifestFormHandler - Validates the slots the user just supplied.

use serde_json::{Map, Value};

use crate::domain::manifest::{
    validate_field, CorrectionPrompt, FieldName, FieldValidation, HostDirective, SlotValue,
    UnknownFieldError,
};

/// Command to validate form slots.
#[derive(Debug, Clone, Default)]
pub struct ValidateManifestFormCommand {
    /// Current slot values as tracked by the host.
    pub slots: Map<String, Value>,
    /// The slot the host last asked for, if any.
    pub requested_slot: Option<String>,
}

/// Per-field validation decisions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidateManifestFormResult {
    pub validations: Vec<(FieldName, FieldValidation)>,
}

impl ValidateManifestFormResult {
    /// One `SetField` per validated field.
    pub fn directives(&self) -> Vec<HostDirective> {
        self.validations
            .iter()
            .map(|(field, validation)| validation.directive(*field))
            .collect()
    }

    /// Prompts to relay for rejected fields.
    pub fn prompts(&self) -> Vec<&CorrectionPrompt> {
        self.validations
            .iter()
            .filter_map(|(_, validation)| validation.correction_prompt())
            .collect()
    }
}

/// Handler for form validation.
///
/// With a requested slot only that field is validated, even when its value is
/// empty. Without one, every required field carrying a value is validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateManifestFormHandler;

impl ValidateManifestFormHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: ValidateManifestFormCommand,
    ) -> Result<ValidateManifestFormResult, UnknownFieldError> {
        let targets: Vec<FieldName> = match cmd.requested_slot.as_deref() {
            Some(slot) => vec![slot.parse::<FieldName>()?],
            None => FieldName::ALL
                .iter()
                .copied()
                .filter(|name| !slot_value(&cmd.slots, *name).is_empty())
                .collect(),
        };

        let validations = targets
            .into_iter()
            .map(|name| {
                let validation = validate_field(name, &slot_value(&cmd.slots, name));
                tracing::debug!(field = %name, status = ?validation.status(), "Validated slot");
                (name, validation)
            })
            .collect();

        Ok(ValidateManifestFormResult { validations })
    }
}

fn slot_value(slots: &Map<String, Value>, name: FieldName) -> SlotValue {
    SlotValue::from(slots.get(name.as_str()).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manifest::{NormalizedValue, PromptKind};
    use serde_json::json;

    fn command(slots: Value, requested_slot: Option<&str>) -> ValidateManifestFormCommand {
        ValidateManifestFormCommand {
            slots: slots.as_object().cloned().unwrap_or_default(),
            requested_slot: requested_slot.map(str::to_string),
        }
    }

    #[test]
    fn validates_only_requested_slot() {
        let cmd = command(
            json!({ "freight_cost": "$150,000", "weight": "heavy" }),
            Some("freight_cost"),
        );

        let result = ValidateManifestFormHandler::new().handle(cmd).unwrap();

        assert_eq!(
            result.directives(),
            vec![HostDirective::SetField {
                field: FieldName::FreightCost,
                value: Some(NormalizedValue::Amount(150_000)),
            }]
        );
        assert!(result.prompts().is_empty());
    }

    #[test]
    fn requested_empty_slot_is_asked_again() {
        let cmd = command(json!({ "freight_cost": null }), Some("freight_cost"));

        let result = ValidateManifestFormHandler::new().handle(cmd).unwrap();

        let prompts = result.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].kind, PromptKind::Missing);
        assert_eq!(
            result.directives(),
            vec![HostDirective::SetField {
                field: FieldName::FreightCost,
                value: None,
            }]
        );
    }

    #[test]
    fn without_requested_slot_validates_every_supplied_field() {
        let cmd = command(
            json!({ "weight": "heavy", "origin": "Cali", "destination": null, "other": 1 }),
            None,
        );

        let result = ValidateManifestFormHandler::new().handle(cmd).unwrap();

        let fields: Vec<FieldName> = result.validations.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![FieldName::Weight, FieldName::Origin]);
        assert_eq!(result.prompts().len(), 1);
        assert_eq!(result.prompts()[0].field, FieldName::Weight);
    }

    #[test]
    fn unknown_requested_slot_is_an_error() {
        let cmd = command(json!({}), Some("favourite_color"));

        let err = ValidateManifestFormHandler::new().handle(cmd).unwrap_err();

        assert_eq!(err, UnknownFieldError::new("favourite_color"));
    }

    #[test]
    fn no_slots_yields_no_validations() {
        let result = ValidateManifestFormHandler::new()
            .handle(ValidateManifestFormCommand::default())
            .unwrap();
        assert!(result.validations.is_empty());
    }
}
