//! HTTP handlers for the action webhook.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::handlers::actions::{ActionDispatcher, ActionError, DispatchActionCommand};

use super::dto::{ActionInfo, ActionRequest, ActionResponseBody, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ActionsAppState {
    dispatcher: Arc<ActionDispatcher>,
}

impl ActionsAppState {
    pub fn new(dispatcher: Arc<ActionDispatcher>) -> Self {
        Self { dispatcher }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /webhook - Run one action
pub async fn run_action(
    State(state): State<ActionsAppState>,
    Json(req): Json<ActionRequest>,
) -> Response {
    let cmd = DispatchActionCommand::from(req);

    match state.dispatcher.handle(cmd).await {
        Ok(response) => (StatusCode::OK, Json(ActionResponseBody::from(response))).into_response(),
        Err(e) => handle_action_error(e),
    }
}

/// GET /actions - List served actions
pub async fn list_actions() -> Json<Vec<ActionInfo>> {
    Json(
        ActionDispatcher::actions()
            .iter()
            .map(|name| ActionInfo {
                name: name.to_string(),
            })
            .collect(),
    )
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "docubot-actions" }))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_action_error(error: ActionError) -> Response {
    let (status, code) = match &error {
        ActionError::UnknownAction(_) => (StatusCode::NOT_FOUND, "UNKNOWN_ACTION"),
        ActionError::UnknownField(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_FIELD"),
    };

    tracing::warn!(%error, error_code = code, "Action failed");
    (status, Json(ErrorResponse::new(code, error.to_string()))).into_response()
}
