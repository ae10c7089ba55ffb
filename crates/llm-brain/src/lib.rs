//! Language-model brains for the complaint assistant.
//!
//! Two backends implement [`brain_core::Brain`]:
//!
//! - [`OllamaBrain`] talks to a local Ollama server (`/api/chat`). This is the
//!   default and needs no API key.
//! - [`OpenAiBrain`] talks to any OpenAI-compatible chat-completions endpoint.
//!
//! [`build_brain`] picks one from an [`LlmBrainConfig`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use llm_brain::{build_brain, LlmBrainConfig};
//! use brain_core::ChatMessage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = build_brain(LlmBrainConfig::from_env()?)?;
//!     let reply = brain.complete(&[ChatMessage::user("Hello!")]).await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod ollama;
mod openai;

use std::sync::Arc;

pub use config::{LlmBrainConfig, LlmBrainConfigBuilder, Provider};
pub use ollama::OllamaBrain;
pub use openai::OpenAiBrain;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, ChatMessage, Role};

/// Build the brain selected by `config.provider`.
pub fn build_brain(config: LlmBrainConfig) -> Result<Arc<dyn Brain>, BrainError> {
    let brain: Arc<dyn Brain> = match config.provider {
        Provider::Ollama => Arc::new(OllamaBrain::new(config)?),
        Provider::OpenAi => Arc::new(OpenAiBrain::new(config)?),
    };
    Ok(brain)
}
