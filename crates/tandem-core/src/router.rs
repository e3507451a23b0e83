//! Completion router — single primary attempt with one fallback

use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::providers::CompletionBackend;
use crate::types::{CompletionResult, Message};

/// Routes a completion request to the primary backend, falling back to the
/// secondary backend on any primary failure.
///
/// Exactly two attempts at most: no retries, no backoff, no cross-request
/// provider-health state. Each backend reshapes the untouched message
/// sequence to its own wire contract.
pub struct CompletionRouter {
    primary: Box<dyn CompletionBackend>,
    fallback: Box<dyn CompletionBackend>,
}

impl CompletionRouter {
    pub fn new(primary: Box<dyn CompletionBackend>, fallback: Box<dyn CompletionBackend>) -> Self {
        Self { primary, fallback }
    }

    /// Send a completion request, trying the fallback backend if the
    /// primary fails for any reason.
    ///
    /// Only the fallback's error is surfaced when both fail; the primary's
    /// failure is logged at the point of capture and recovered.
    pub async fn complete(&self, messages: &[Message]) -> Result<CompletionResult, ProviderError> {
        debug!(
            "Routing {} messages to {} ({})",
            messages.len(),
            self.primary.name(),
            self.primary.model(),
        );

        match self.primary.send(messages).await {
            Ok(result) => Ok(result),
            Err(primary_err) => {
                warn!(
                    "Primary provider {} failed, falling back to {}: {}",
                    self.primary.name(),
                    self.fallback.name(),
                    primary_err,
                );

                let result = self.fallback.send(messages).await?;
                info!(
                    "Request succeeded on fallback provider {} ({})",
                    self.fallback.name(),
                    self.fallback.model(),
                );
                Ok(result)
            }
        }
    }

    /// Primary provider's name
    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    /// Fallback provider's name
    pub fn fallback_name(&self) -> &str {
        self.fallback.name()
    }
}
