//! Axum router configuration for the action webhook.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, list_actions, run_action, ActionsAppState};

/// Create the action server router.
///
/// # Routes
/// - `POST /webhook` - Run the named action against a tracker snapshot
/// - `GET /actions` - List served actions
/// - `GET /health` - Liveness probe
pub fn actions_router(state: ActionsAppState) -> Router {
    Router::new()
        .route("/webhook", post(run_action))
        .route("/actions", get(list_actions))
        .route("/health", get(health))
        .with_state(state)
}
