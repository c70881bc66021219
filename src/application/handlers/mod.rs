//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod actions;
pub mod manifest;

pub use actions::{ActionDispatcher, ActionError, ActionResponse, BotMessage, DispatchActionCommand};
pub use manifest::{
    SubmitManifestCommand, SubmitManifestHandler, ValidateManifestFormCommand,
    ValidateManifestFormHandler, ValidateManifestFormResult,
};
