//! Canonical chat types shared across the gateway

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One turn in a chat-style conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Opaque payload returned by whichever provider answered.
///
/// The router never inspects its shape, only propagates it verbatim.
pub type CompletionResult = Value;

/// Inbound request body.
///
/// Clients send either `{"messages": [...]}` or a bare array of messages;
/// both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChatBody {
    Wrapped { messages: Vec<Message> },
    Bare(Vec<Message>),
}

impl ChatBody {
    /// Extract the ordered message sequence
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Self::Wrapped { messages } => messages,
            Self::Bare(messages) => messages,
        }
    }
}
