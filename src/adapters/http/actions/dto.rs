//! HTTP DTOs (Data Transfer Objects) for the action webhook.
//!
//! The wire format follows the custom-action protocol dialogue hosts already
//! speak: a tracker snapshot in, slot events and responses out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::handlers::actions::{ActionResponse, BotMessage, DispatchActionCommand};
use crate::domain::manifest::HostDirective;

/// Slot holding the field the host last asked for.
pub const REQUESTED_SLOT: &str = "requested_slot";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Action invocation from the host.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    /// Name of the action to run.
    pub next_action: String,
    /// Conversation identifier (the user's phone number for WhatsApp).
    #[serde(default)]
    pub sender_id: String,
    /// Snapshot of the conversation state.
    #[serde(default)]
    pub tracker: TrackerSnapshot,
}

/// The part of the host's tracker the actions read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerSnapshot {
    /// Current slot values.
    #[serde(default)]
    pub slots: Map<String, Value>,
    /// Requested slot, when sent outside `slots`.
    #[serde(default)]
    pub requested_slot: Option<String>,
}

impl TrackerSnapshot {
    /// The requested slot, read from either location.
    pub fn requested_slot(&self) -> Option<String> {
        self.requested_slot.clone().or_else(|| {
            self.slots
                .get(REQUESTED_SLOT)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
    }
}

impl From<ActionRequest> for DispatchActionCommand {
    fn from(req: ActionRequest) -> Self {
        let requested_slot = req.tracker.requested_slot();
        DispatchActionCommand {
            action: req.next_action,
            sender_id: req.sender_id,
            slots: req.tracker.slots,
            requested_slot,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Events and responses returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResponseBody {
    pub events: Vec<EventDto>,
    pub responses: Vec<ResponseDto>,
}

/// A tracker event for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum EventDto {
    /// Set (or clear, with `null`) a slot.
    #[serde(rename = "slot")]
    Slot { name: String, value: Value },
    /// Clear every slot.
    #[serde(rename = "reset_slots")]
    ResetSlots,
}

/// A message for the host to send to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl From<HostDirective> for EventDto {
    fn from(directive: HostDirective) -> Self {
        match directive {
            HostDirective::SetField { field, value } => EventDto::Slot {
                name: field.as_str().to_string(),
                value: value.map(Value::from).unwrap_or(Value::Null),
            },
            HostDirective::ResetAllFields => EventDto::ResetSlots,
        }
    }
}

impl From<BotMessage> for ResponseDto {
    fn from(message: BotMessage) -> Self {
        match message {
            BotMessage::Text(text) => ResponseDto {
                text: Some(text),
                template: None,
            },
            BotMessage::Template(name) => ResponseDto {
                text: None,
                template: Some(name),
            },
        }
    }
}

impl From<ActionResponse> for ActionResponseBody {
    fn from(response: ActionResponse) -> Self {
        Self {
            events: response.directives.into_iter().map(EventDto::from).collect(),
            responses: response.messages.into_iter().map(ResponseDto::from).collect(),
        }
    }
}

/// One entry of `GET /actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub name: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
