//! Action handlers - The surface the dialogue host drives call-by-call.

mod action_response;
mod dispatch_action;

pub use action_response::{ActionResponse, BotMessage};
pub use dispatch_action::{
    ActionDispatcher, ActionError, DispatchActionCommand, ACTION_DEFAULT_FALLBACK,
    ACTION_SUBMIT_MANIFEST, ACTION_VALIDATE_MANIFEST_FORM, FALLBACK_TEMPLATE,
};
