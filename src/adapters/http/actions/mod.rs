//! HTTP adapter for the action webhook.
//!
//! Exposes the manifest actions to the dialogue host:
//! - `POST /webhook` - Run an action (validate, submit, fallback)
//! - `GET /actions` - List served actions
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::ActionsAppState;
pub use routes::actions_router;
