//! Groq backend (fallback provider) — OpenAI-compatible chat completions
//!
//! Groq accepts the full message sequence as-is, including inline
//! system-role entries, so no reshaping happens here.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::ProviderError;
use crate::types::{CompletionResult, Message};

use super::CompletionBackend;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";

const TEMPERATURE: f64 = 0.6;

/// Groq backend
pub struct GroqBackend {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GroqBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqBackend")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GroqBackend {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    /// Build the chat-completions request body with the messages inline
    fn request_body(&self, messages: &[Message]) -> Value {
        serde_json::json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "stream": false,
            "n": 1,
            "messages": messages,
        })
    }
}

#[async_trait]
impl CompletionBackend for GroqBackend {
    fn name(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, messages: &[Message]) -> Result<CompletionResult, ProviderError> {
        let url = format!("{}/openai/v1/chat/completions", self.base_url);
        let body = self.request_body(messages);

        debug!(
            "Groq request: model={}, messages={}",
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::transport("groq", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::http("groq", status.as_u16(), error_text));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::transport("groq", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    fn backend() -> GroqBackend {
        GroqBackend::new(
            "gsk_secret".to_string(),
            "llama-3.1-70b-versatile".to_string(),
            DEFAULT_BASE_URL.to_string(),
        )
    }

    fn msg(role: ChatRole, content: &str) -> Message {
        Message {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_request_body_keeps_system_inline() {
        let msgs = vec![
            msg(ChatRole::System, "sys"),
            msg(ChatRole::User, "u1"),
            msg(ChatRole::Assistant, "a1"),
            msg(ChatRole::User, "u2"),
        ];
        let body = backend().request_body(&msgs);
        let wire = body["messages"].as_array().unwrap();
        assert_eq!(wire.len(), 4);
        assert_eq!(wire[0]["role"], "system");
        assert_eq!(wire[0]["content"], "sys");
        let contents: Vec<&str> = wire.iter().map(|m| m["content"].as_str().unwrap()).collect();
        assert_eq!(contents, vec!["sys", "u1", "a1", "u2"]);
    }

    #[test]
    fn test_request_body_parameters() {
        let body = backend().request_body(&[msg(ChatRole::User, "hi")]);
        assert_eq!(body["model"], "llama-3.1-70b-versatile");
        assert_eq!(body["temperature"], 0.6);
        assert_eq!(body["stream"], false);
        assert_eq!(body["n"], 1);
    }

    #[test]
    fn test_backend_debug_hides_key() {
        let b = backend();
        let debug = format!("{:?}", b);
        assert!(!debug.contains("gsk_secret"));
        assert_eq!(b.name(), "groq");
        assert_eq!(b.model(), "llama-3.1-70b-versatile");
    }
}
