//! Process configuration, read once at startup from the environment

use anyhow::{Result, bail};

use tandem_core::providers::{anthropic, groq};

/// Full gateway configuration
#[derive(Debug, Clone)]
pub struct TandemConfig {
    pub anthropic: AnthropicConfig,
    pub groq: GroqConfig,
    pub server: ServerConfig,
}

#[derive(Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl std::fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl TandemConfig {
    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source (testable seam)
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let anthropic_key = match lookup("ANTHROPIC_API_KEY") {
            Some(key) if !key.is_empty() => key,
            _ => bail!("ANTHROPIC_API_KEY is not set"),
        };
        let groq_key = match lookup("GROQ_API_KEY") {
            Some(key) if !key.is_empty() => key,
            _ => bail!("GROQ_API_KEY is not set"),
        };
        let groq_model = match lookup("GROQ_MODEL") {
            Some(model) if !model.is_empty() => model,
            _ => bail!("GROQ_MODEL is not set"),
        };

        let max_tokens = match lookup("ANTHROPIC_MAX_TOKENS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("ANTHROPIC_MAX_TOKENS is not a number: {}", raw))?,
            None => anthropic::DEFAULT_MAX_TOKENS,
        };

        let port = match lookup("TANDEM_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("TANDEM_PORT is not a valid port: {}", raw))?,
            None => default_port(),
        };

        Ok(Self {
            anthropic: AnthropicConfig {
                api_key: anthropic_key,
                base_url: lookup("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|| anthropic::DEFAULT_BASE_URL.to_string()),
                model: lookup("ANTHROPIC_MODEL")
                    .unwrap_or_else(|| anthropic::DEFAULT_MODEL.to_string()),
                max_tokens,
            },
            groq: GroqConfig {
                api_key: groq_key,
                base_url: lookup("GROQ_BASE_URL")
                    .unwrap_or_else(|| groq::DEFAULT_BASE_URL.to_string()),
                model: groq_model,
            },
            server: ServerConfig {
                bind: lookup("TANDEM_BIND").unwrap_or_else(default_bind),
                port,
            },
        })
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Mask a secret string for safe display in Debug output / logs.
/// Shows first 3 and last 4 chars for keys longer than 7 chars, otherwise "***".
fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "(empty)".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > 7 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        "***".to_string()
    }
}
