//! tandem-core - dual-provider completion routing
//!
//! This crate provides:
//! - Canonical chat types shared by the HTTP surface and the backends
//! - The Anthropic Messages backend (primary) and the Groq chat-completions
//!   backend (fallback)
//! - The [`CompletionRouter`] that tries the primary and falls back once

pub mod error;
pub mod providers;
pub mod router;
pub mod types;

// Re-export main types for convenience
pub use error::{GatewayError, ProviderError};
pub use providers::{AnthropicBackend, CompletionBackend, GroqBackend};
pub use router::CompletionRouter;
pub use types::{ChatBody, ChatRole, CompletionResult, Message};
