//! ActionDispatcher - Routes host action calls to the manifest handlers.

use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::application::handlers::manifest::{
    SubmitManifestCommand, SubmitManifestHandler, ValidateManifestFormCommand,
    ValidateManifestFormHandler,
};
use crate::domain::manifest::{FieldName, ManifestError, ManifestForm, UnknownFieldError};

use super::action_response::{ActionResponse, BotMessage};

/// Validates slots as the user fills the form.
pub const ACTION_VALIDATE_MANIFEST_FORM: &str = "validate_manifest_form";
/// Submits the completed form.
pub const ACTION_SUBMIT_MANIFEST: &str = "action_submit_manifest";
/// Answers messages the host could not classify.
pub const ACTION_DEFAULT_FALLBACK: &str = "action_default_fallback";
/// Host template relayed by the fallback action.
pub const FALLBACK_TEMPLATE: &str = "utter_fallback";

/// A single action invocation from the host.
#[derive(Debug, Clone, Default)]
pub struct DispatchActionCommand {
    pub action: String,
    pub sender_id: String,
    pub slots: Map<String, Value>,
    pub requested_slot: Option<String>,
}

/// Errors surfaced to the host as a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
}

/// Dispatches actions by name.
pub struct ActionDispatcher {
    validate_handler: ValidateManifestFormHandler,
    submit_handler: Arc<SubmitManifestHandler>,
}

impl ActionDispatcher {
    pub fn new(submit_handler: Arc<SubmitManifestHandler>) -> Self {
        Self {
            validate_handler: ValidateManifestFormHandler::new(),
            submit_handler,
        }
    }

    /// Names of every action this dispatcher serves.
    pub fn actions() -> [&'static str; 3] {
        [
            ACTION_VALIDATE_MANIFEST_FORM,
            ACTION_SUBMIT_MANIFEST,
            ACTION_DEFAULT_FALLBACK,
        ]
    }

    pub async fn handle(&self, cmd: DispatchActionCommand) -> Result<ActionResponse, ActionError> {
        tracing::debug!(action = %cmd.action, sender = %cmd.sender_id, "Dispatching action");

        match cmd.action.as_str() {
            ACTION_VALIDATE_MANIFEST_FORM => self.validate(cmd),
            ACTION_SUBMIT_MANIFEST => Ok(self.submit(cmd).await),
            ACTION_DEFAULT_FALLBACK => {
                Ok(ActionResponse::new().with_message(BotMessage::template(FALLBACK_TEMPLATE)))
            }
            _ => Err(ActionError::UnknownAction(cmd.action)),
        }
    }

    fn validate(&self, cmd: DispatchActionCommand) -> Result<ActionResponse, ActionError> {
        let result = self.validate_handler.handle(ValidateManifestFormCommand {
            slots: cmd.slots,
            requested_slot: cmd.requested_slot,
        })?;

        let response = result.prompts().into_iter().fold(
            ActionResponse::new().with_directives(result.directives()),
            |response, prompt| response.with_message(BotMessage::text(prompt.text.clone())),
        );

        Ok(response)
    }

    async fn submit(&self, cmd: DispatchActionCommand) -> ActionResponse {
        let form = ManifestForm::from_slots(&cmd.slots);

        let record = match form.to_record() {
            Ok(record) => record,
            Err(ManifestError::Incomplete { missing }) => {
                tracing::debug!(
                    sender = %cmd.sender_id,
                    ?missing,
                    "Submission requested before form was complete"
                );
                return ActionResponse::new()
                    .with_message(BotMessage::text(missing_fields_message(&missing)));
            }
        };

        let result = self.submit_handler.handle(SubmitManifestCommand { record }).await;

        ActionResponse::new()
            .with_directives(result.directives())
            .with_message(BotMessage::text(result.message()))
    }
}

fn missing_fields_message(missing: &[FieldName]) -> String {
    let labels: Vec<&str> = missing.iter().map(FieldName::label).collect();
    format!(
        "I still need a few details before generating the manifest: {}.",
        labels.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::manifest::MockManifestGenerator;
    use crate::domain::manifest::{HostDirective, NormalizedValue, BACKEND_REJECTED_MESSAGE};
    use crate::ports::GeneratorError;
    use serde_json::json;

    fn dispatcher(generator: MockManifestGenerator) -> ActionDispatcher {
        ActionDispatcher::new(Arc::new(SubmitManifestHandler::new(Arc::new(generator))))
    }

    fn complete_slots() -> Map<String, Value> {
        json!({
            "freight_cost": 150000,
            "description": "Café en sacos",
            "weight": "500 kg",
            "load_date": "2024-05-01",
            "unload_date": "2024-05-03",
            "vehicle_card": "ABC123",
            "license": "C2-99887766",
            "origin": "Medellín",
            "destination": "Bogotá"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn command(action: &str, slots: Map<String, Value>) -> DispatchActionCommand {
        DispatchActionCommand {
            action: action.to_string(),
            sender_id: "573001112233".to_string(),
            slots,
            requested_slot: None,
        }
    }

    #[tokio::test]
    async fn validate_action_returns_directives_and_prompts() {
        let mut cmd = command(
            ACTION_VALIDATE_MANIFEST_FORM,
            json!({ "weight": "heavy" }).as_object().cloned().unwrap(),
        );
        cmd.requested_slot = Some("weight".to_string());

        let response = dispatcher(MockManifestGenerator::new())
            .handle(cmd)
            .await
            .unwrap();

        assert_eq!(
            response.directives,
            vec![HostDirective::SetField {
                field: FieldName::Weight,
                value: None,
            }]
        );
        assert_eq!(response.messages.len(), 1);
    }

    #[tokio::test]
    async fn submit_action_resets_and_relays_message() {
        let generator = MockManifestGenerator::new().with_url("http://x/y.pdf");
        let response = dispatcher(generator.clone())
            .handle(command(ACTION_SUBMIT_MANIFEST, complete_slots()))
            .await
            .unwrap();

        assert_eq!(response.directives, vec![HostDirective::ResetAllFields]);
        match &response.messages[..] {
            [BotMessage::Text(text)] => assert!(text.contains("http://x/y.pdf")),
            other => panic!("Expected one text message, got {other:?}"),
        }
        let sent = generator.get_calls();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].get(FieldName::FreightCost),
            Some(&NormalizedValue::Amount(150_000))
        );
    }

    #[tokio::test]
    async fn submit_action_resets_even_on_backend_failure() {
        let generator = MockManifestGenerator::new().with_error(GeneratorError::rejected(500));
        let response = dispatcher(generator)
            .handle(command(ACTION_SUBMIT_MANIFEST, complete_slots()))
            .await
            .unwrap();

        assert_eq!(response.directives, vec![HostDirective::ResetAllFields]);
        assert_eq!(
            response.messages,
            vec![BotMessage::text(BACKEND_REJECTED_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn incomplete_form_is_not_submitted() {
        let generator = MockManifestGenerator::new();
        let mut slots = complete_slots();
        slots.remove("origin");
        slots.insert("weight".to_string(), json!("heavy"));

        let response = dispatcher(generator.clone())
            .handle(command(ACTION_SUBMIT_MANIFEST, slots))
            .await
            .unwrap();

        assert_eq!(generator.call_count(), 0);
        assert!(response.directives.is_empty());
        match &response.messages[..] {
            [BotMessage::Text(text)] => {
                assert!(text.contains("cargo weight"));
                assert!(text.contains("origin"));
            }
            other => panic!("Expected one text message, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fallback_relays_template() {
        let response = dispatcher(MockManifestGenerator::new())
            .handle(command(ACTION_DEFAULT_FALLBACK, Map::new()))
            .await
            .unwrap();

        assert!(response.directives.is_empty());
        assert_eq!(response.messages, vec![BotMessage::template(FALLBACK_TEMPLATE)]);
    }

    #[tokio::test]
    async fn unknown_action_is_an_error() {
        let err = dispatcher(MockManifestGenerator::new())
            .handle(command("action_launch_rocket", Map::new()))
            .await
            .unwrap_err();

        assert_eq!(err, ActionError::UnknownAction("action_launch_rocket".to_string()));
    }

    #[tokio::test]
    async fn unknown_requested_slot_is_an_error() {
        let mut cmd = command(ACTION_VALIDATE_MANIFEST_FORM, Map::new());
        cmd.requested_slot = Some("nope".to_string());

        let err = dispatcher(MockManifestGenerator::new())
            .handle(cmd)
            .await
            .unwrap_err();

        assert_eq!(err, ActionError::UnknownField(UnknownFieldError::new("nope")));
    }
}
