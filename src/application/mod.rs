//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ActionDispatcher, ActionError, ActionResponse, BotMessage, DispatchActionCommand,
    SubmitManifestCommand, SubmitManifestHandler, ValidateManifestFormCommand,
    ValidateManifestFormHandler, ValidateManifestFormResult,
};
