//! OllamaBrain implementation using a local Ollama server.

use brain_core::{async_trait, Brain, BrainError, ChatMessage};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{OllamaChatRequest, OllamaChatResponse, OllamaError, OllamaOptions};
use crate::config::LlmBrainConfig;

/// A brain backed by Ollama's `/api/chat` endpoint.
///
/// Requests are non-streaming; the whole reply comes back in one response.
pub struct OllamaBrain {
    client: Client,
    config: LlmBrainConfig,
}

impl OllamaBrain {
    /// Create a new OllamaBrain with the given configuration.
    pub fn new(config: LlmBrainConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "OllamaBrain initialized with model: {} at {}",
            config.model, config.api_url
        );

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LlmBrainConfig {
        &self.config
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<OllamaChatResponse, BrainError> {
        let url = format!("{}/api/chat", self.config.api_url);

        let request = OllamaChatRequest {
            model: &self.config.model,
            messages,
            stream: false,
            options: OllamaOptions::from_parts(self.config.temperature, self.config.max_tokens),
        };

        debug!("Sending request to Ollama: {:?}", request);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BrainError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<OllamaError>(&error_text) {
                return Err(BrainError::ProcessingFailed(format!(
                    "Ollama error ({}): {}",
                    status.as_u16(),
                    api_error.error
                )));
            }

            return Err(BrainError::ProcessingFailed(format!(
                "Ollama error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Brain for OllamaBrain {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BrainError> {
        let response = self.chat(messages).await?;

        if let (Some(prompt), Some(eval)) = (response.prompt_eval_count, response.eval_count) {
            debug!("Token usage - prompt: {}, completion: {}", prompt, eval);
        }

        match response.message {
            Some(message) if !message.content.is_empty() => Ok(message.content),
            _ => {
                warn!("Ollama returned no content");
                Err(BrainError::ProcessingFailed(
                    "empty response from model".to_string(),
                ))
            }
        }
    }

    fn name(&self) -> &str {
        "OllamaBrain"
    }

    async fn is_ready(&self) -> bool {
        let url = format!("{}/api/tags", self.config.api_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ollama readiness probe failed: {}", e);
                false
            }
        }
    }
}
