//! What an action hands back to the dialogue host.

use serde::Serialize;

use crate::domain::manifest::HostDirective;

/// A message for the host to relay to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BotMessage {
    /// Literal text.
    Text(String),
    /// Name of a host-side response template.
    Template(String),
}

impl BotMessage {
    pub fn text(text: impl Into<String>) -> Self {
        BotMessage::Text(text.into())
    }

    pub fn template(name: impl Into<String>) -> Self {
        BotMessage::Template(name.into())
    }
}

/// State changes plus messages, in the order the host should apply them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionResponse {
    pub directives: Vec<HostDirective>,
    pub messages: Vec<BotMessage>,
}

impl ActionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directives(mut self, directives: impl IntoIterator<Item = HostDirective>) -> Self {
        self.directives.extend(directives);
        self
    }

    pub fn with_message(mut self, message: BotMessage) -> Self {
        self.messages.push(message);
        self
    }
}
