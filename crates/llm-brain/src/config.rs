//! Configuration for the language-model brains.

use brain_core::BrainError;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Which model backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    /// Local Ollama server.
    #[default]
    Ollama,
    /// OpenAI-compatible chat-completions API.
    OpenAi,
}

impl Provider {
    /// Default base URL for this provider.
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Provider::Ollama => "http://127.0.0.1:11434",
            Provider::OpenAi => "https://api.openai.com",
        }
    }

    /// Default model for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Ollama => "llama3.2:3b",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }

    /// Default sampling temperature for this provider.
    pub fn default_temperature(&self) -> f32 {
        match self {
            Provider::Ollama => 0.3,
            Provider::OpenAi => 0.0,
        }
    }
}

impl FromStr for Provider {
    type Err = BrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" | "local" => Ok(Provider::Ollama),
            "openai" | "open_ai" | "open-ai" => Ok(Provider::OpenAi),
            other => Err(BrainError::Configuration(format!(
                "unknown LLM provider: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Ollama => f.write_str("ollama"),
            Provider::OpenAi => f.write_str("openai"),
        }
    }
}

/// Configuration for a language-model brain.
#[derive(Debug, Clone)]
pub struct LlmBrainConfig {
    /// Backend to use.
    pub provider: Provider,

    /// Base URL of the model server.
    pub api_url: String,

    /// API key (required for OpenAI, ignored by Ollama).
    pub api_key: Option<String>,

    /// Model name to use.
    pub model: String,

    /// Temperature for generation.
    pub temperature: Option<f32>,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,
}

impl Default for LlmBrainConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LlmBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LLM_PROVIDER` - `ollama` (default) or `openai`
    /// - `USE_OPENAI` - `true`/`1` selects `openai` when `LLM_PROVIDER` is unset
    /// - `LLM_API_URL` - Base URL (default depends on provider)
    /// - `LLM_MODEL` - Model name (default: llama3.2:3b / gpt-4o-mini)
    /// - `LLM_TEMPERATURE` - Temperature (default: 0.3 / 0.0)
    /// - `LLM_MAX_TOKENS` - Max tokens (default: unset)
    /// - `OPENAI_API_KEY` - Required when the provider is `openai`
    pub fn from_env() -> Result<Self, BrainError> {
        let provider = match env::var("LLM_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => {
                let use_openai = env::var("USE_OPENAI")
                    .ok()
                    .map(|v| v.to_lowercase() == "true" || v == "1")
                    .unwrap_or(false);
                if use_openai {
                    Provider::OpenAi
                } else {
                    Provider::Ollama
                }
            }
        };

        let mut builder = Self::builder().provider(provider);

        if let Ok(url) = env::var("LLM_API_URL") {
            builder = builder.api_url(url);
        }
        if let Ok(model) = env::var("LLM_MODEL") {
            builder = builder.model(model);
        }
        if let Some(temperature) = parse_env("LLM_TEMPERATURE")? {
            builder = builder.temperature(temperature);
        }
        if let Some(tokens) = parse_env("LLM_MAX_TOKENS")? {
            builder = builder.max_tokens(tokens);
        }

        match env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => builder = builder.api_key(key),
            _ if provider == Provider::OpenAi => {
                return Err(BrainError::Configuration(
                    "OPENAI_API_KEY not set".to_string(),
                ))
            }
            _ => {}
        }

        Ok(builder.build())
    }

    /// Create a new config builder.
    pub fn builder() -> LlmBrainConfigBuilder {
        LlmBrainConfigBuilder::default()
    }
}

/// Builder for LlmBrainConfig.
///
/// Unset fields fall back to the chosen provider's defaults at `build()`.
#[derive(Debug, Default)]
pub struct LlmBrainConfigBuilder {
    provider: Provider,
    api_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl LlmBrainConfigBuilder {
    /// Set the provider.
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LlmBrainConfig {
        let provider = self.provider;
        LlmBrainConfig {
            provider,
            api_url: self
                .api_url
                .unwrap_or_else(|| provider.default_api_url().to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: self.api_key,
            model: self
                .model
                .unwrap_or_else(|| provider.default_model().to_string()),
            temperature: Some(
                self.temperature
                    .unwrap_or_else(|| provider.default_temperature()),
            ),
            max_tokens: self.max_tokens,
        }
    }
}

/// Read an optional numeric env var; a value that does not parse is an error.
fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, BrainError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            BrainError::Configuration(format!("{} must be a number, got {:?}", name, value))
        }),
        Err(_) => Ok(None),
    }
}
