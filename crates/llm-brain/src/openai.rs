//! OpenAiBrain implementation using an OpenAI-compatible chat-completions API.

use brain_core::{async_trait, Brain, BrainError, ChatMessage};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::LlmBrainConfig;

/// A brain backed by `/v1/chat/completions`.
pub struct OpenAiBrain {
    client: Client,
    config: LlmBrainConfig,
    api_key: String,
}

impl OpenAiBrain {
    /// Create a new OpenAiBrain with the given configuration.
    ///
    /// Fails with [`BrainError::Configuration`] when no API key is set.
    pub fn new(config: LlmBrainConfig) -> Result<Self, BrainError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| BrainError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        let client = Client::builder()
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!("OpenAiBrain initialized with model: {}", config.model);

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LlmBrainConfig {
        &self.config
    }

    async fn chat_completion(
        &self,
        messages: &[ChatMessage],
    ) -> Result<ChatCompletionResponse, BrainError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to chat completions API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BrainError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(BrainError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(BrainError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        debug!("Received response from chat completions API: {:?}", completion);

        Ok(completion)
    }
}

#[async_trait]
impl Brain for OpenAiBrain {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BrainError> {
        let completion = self.chat_completion(messages).await?;

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty());

        match content {
            Some(content) => Ok(content),
            None => {
                warn!("No content in response");
                Err(BrainError::ProcessingFailed(
                    "empty response from model".to_string(),
                ))
            }
        }
    }

    fn name(&self) -> &str {
        "OpenAiBrain"
    }
}
