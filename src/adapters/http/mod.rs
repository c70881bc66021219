//! HTTP adapters - REST API implementations.

pub mod actions;

pub use actions::{actions_router, ActionsAppState};
