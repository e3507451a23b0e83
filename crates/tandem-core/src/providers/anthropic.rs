//! Anthropic Messages API backend (primary provider)

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::ProviderError;
use crate::types::{ChatRole, CompletionResult, Message};

use super::CompletionBackend;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic backend
pub struct AnthropicBackend {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl std::fmt::Debug for AnthropicBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicBackend")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl AnthropicBackend {
    pub fn new(api_key: String, model: String, base_url: String, max_tokens: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url,
            model,
            max_tokens,
        }
    }

    /// Separate the system message from the conversational list.
    ///
    /// The Messages API rejects inline system-role entries, so the first
    /// system message becomes the top-level `system` field and all
    /// system-role entries are dropped from the list. Relative order of
    /// the remaining messages is preserved.
    fn split_system(messages: &[Message]) -> (Option<String>, Vec<AnthropicMessage>) {
        let system = messages
            .iter()
            .find(|m| m.role == ChatRole::System)
            .map(|m| m.content.clone());

        let conversational = messages
            .iter()
            .filter(|m| m.role != ChatRole::System)
            .map(|m| AnthropicMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        (system, conversational)
    }
}

#[async_trait]
impl CompletionBackend for AnthropicBackend {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, messages: &[Message]) -> Result<CompletionResult, ProviderError> {
        let url = format!("{}/v1/messages", self.base_url);
        let (system, anthropic_messages) = Self::split_system(messages);

        debug!(
            "Anthropic request: model={}, messages={}, system={}",
            self.model,
            anthropic_messages.len(),
            system.is_some(),
        );

        let mut body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": anthropic_messages,
        });
        if let Some(system) = system {
            body["system"] = Value::String(system);
        }

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::transport("anthropic", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::http("anthropic", status.as_u16(), error_text));
        }

        // Returned verbatim; the router never inspects the payload shape
        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::transport("anthropic", e))
    }
}

// ── Anthropic wire types ──

#[derive(Debug, Clone, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: ChatRole, content: &str) -> Message {
        Message {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_split_system_extracts_field() {
        let msgs = vec![
            msg(ChatRole::System, "be brief"),
            msg(ChatRole::User, "hello"),
        ];
        let (system, rest) = AnthropicBackend::split_system(&msgs);
        assert_eq!(system.as_deref(), Some("be brief"));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].role, "user");
        assert_eq!(rest[0].content, "hello");
    }

    #[test]
    fn test_split_system_omitted_when_absent() {
        let msgs = vec![msg(ChatRole::User, "hello")];
        let (system, rest) = AnthropicBackend::split_system(&msgs);
        assert!(system.is_none());
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_split_system_preserves_order() {
        let msgs = vec![
            msg(ChatRole::System, "sys"),
            msg(ChatRole::User, "u1"),
            msg(ChatRole::Assistant, "a1"),
            msg(ChatRole::User, "u2"),
        ];
        let (system, rest) = AnthropicBackend::split_system(&msgs);
        assert_eq!(system.as_deref(), Some("sys"));
        let contents: Vec<&str> = rest.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["u1", "a1", "u2"]);
    }

    #[test]
    fn test_split_system_mid_sequence() {
        // A system entry anywhere in the sequence is pulled out
        let msgs = vec![
            msg(ChatRole::User, "u1"),
            msg(ChatRole::System, "late sys"),
            msg(ChatRole::User, "u2"),
        ];
        let (system, rest) = AnthropicBackend::split_system(&msgs);
        assert_eq!(system.as_deref(), Some("late sys"));
        let contents: Vec<&str> = rest.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["u1", "u2"]);
    }

    #[test]
    fn test_wire_message_serialization() {
        let wire = AnthropicMessage {
            role: "user".to_string(),
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&wire).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }

    #[test]
    fn test_backend_debug_hides_key() {
        let backend = AnthropicBackend::new(
            "sk-ant-secret".to_string(),
            DEFAULT_MODEL.to_string(),
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_MAX_TOKENS,
        );
        let debug = format!("{:?}", backend);
        assert!(!debug.contains("sk-ant-secret"));
        assert_eq!(backend.name(), "anthropic");
        assert_eq!(backend.model(), DEFAULT_MODEL);
    }
}
