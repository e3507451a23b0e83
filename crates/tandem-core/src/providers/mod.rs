//! Provider backends for the two upstream completion APIs
//!
//! Each backend reshapes the canonical message sequence to its own wire
//! contract and returns the upstream JSON payload untouched. Backends
//! implement the [`CompletionBackend`] trait and are composed via
//! [`crate::CompletionRouter`] for failover.

pub mod anthropic;
pub mod groq;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{CompletionResult, Message};

pub use anthropic::AnthropicBackend;
pub use groq::GroqBackend;

/// Trait that all completion backends implement
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Human-readable provider name (e.g. "anthropic", "groq")
    fn name(&self) -> &str;

    /// Model identifier submitted to the upstream API
    fn model(&self) -> &str;

    /// Submit the ordered message sequence, reshaped to the provider's
    /// wire contract, and return the raw response payload.
    async fn send(&self, messages: &[Message]) -> Result<CompletionResult, ProviderError>;
}
