//! Error types for the gateway and its provider backends

use thiserror::Error;

/// Failure raised by a provider backend.
///
/// Carries the provider name, the upstream HTTP status when one was
/// received, and a message suitable for logging.
#[derive(Debug, Clone, Error)]
#[error("{provider} request failed: {message}")]
pub struct ProviderError {
    pub provider: String,
    pub status: Option<u16>,
    pub message: String,
}

impl ProviderError {
    /// Upstream returned a non-success HTTP status
    pub fn http(provider: &str, status: u16, message: impl Into<String>) -> Self {
        Self {
            provider: provider.to_string(),
            status: Some(status),
            message: message.into(),
        }
    }

    /// Transport-level failure (connect, timeout, body decode)
    pub fn transport(provider: &str, err: impl std::fmt::Display) -> Self {
        Self {
            provider: provider.to_string(),
            status: None,
            message: err.to_string(),
        }
    }
}

/// Terminal, caller-visible failure of a gateway request
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Inbound body was not valid JSON or did not match the message-list shape.
    /// Never triggers provider calls.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Both providers failed; carries the fallback provider's error
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl GatewayError {
    /// HTTP status for the outward response: 400 for bad input, the
    /// upstream status when one is known, otherwise 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Upstream(err) => err.status.unwrap_or(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_http() {
        let err = ProviderError::http("anthropic", 429, "rate limited");
        assert_eq!(err.provider, "anthropic");
        assert_eq!(err.status, Some(429));
        assert_eq!(err.to_string(), "anthropic request failed: rate limited");
    }

    #[test]
    fn test_provider_error_transport_has_no_status() {
        let err = ProviderError::transport("groq", "connection refused");
        assert_eq!(err.status, None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_gateway_error_status_invalid_request() {
        let err = GatewayError::InvalidRequest("not json".to_string());
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_gateway_error_status_from_upstream() {
        let err = GatewayError::from(ProviderError::http("groq", 503, "overloaded"));
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn test_gateway_error_status_defaults_to_500() {
        let err = GatewayError::from(ProviderError::transport("groq", "timed out"));
        assert_eq!(err.status_code(), 500);
    }
}
