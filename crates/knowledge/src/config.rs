//! Embedding backend configuration.

use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::embedder::{
    Embedder, HashingEmbedder, OllamaEmbedder, DEFAULT_EMBEDDING_MODEL, DEFAULT_HASHING_DIMENSION,
};
use crate::error::{KnowledgeError, Result};

/// Default Ollama URL for embeddings.
pub const DEFAULT_EMBEDDING_API_URL: &str = "http://127.0.0.1:11434";

/// Which embedder to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddingProvider {
    #[default]
    Ollama,
    /// Offline feature hashing, no server needed.
    Hashing,
}

impl FromStr for EmbeddingProvider {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(EmbeddingProvider::Ollama),
            "hashing" | "hash" | "local" => Ok(EmbeddingProvider::Hashing),
            other => Err(KnowledgeError::InvalidConfig(format!(
                "unknown embedding provider: {}",
                other
            ))),
        }
    }
}

/// Configuration for the embedding backend.
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub api_url: String,
    /// Vector size for the hashing embedder.
    pub dimension: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::Ollama,
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            api_url: DEFAULT_EMBEDDING_API_URL.to_string(),
            dimension: DEFAULT_HASHING_DIMENSION,
        }
    }
}

impl EmbedderConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `EMBEDDING_PROVIDER` - `ollama` (default) or `hashing`
    /// - `EMBEDDING_MODEL` - Model name (default: all-minilm)
    /// - `EMBEDDING_API_URL` - Ollama base URL (default: http://127.0.0.1:11434)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(provider) = env::var("EMBEDDING_PROVIDER") {
            config.provider = provider.parse()?;
        }
        if let Ok(model) = env::var("EMBEDDING_MODEL") {
            config.model = model;
        }
        if let Ok(url) = env::var("EMBEDDING_API_URL") {
            config.api_url = url;
        }

        Ok(config)
    }

    /// Offline configuration, used by tests and demos.
    pub fn hashing() -> Self {
        Self {
            provider: EmbeddingProvider::Hashing,
            ..Self::default()
        }
    }

    /// Build the configured embedder.
    pub fn build(&self) -> Result<Arc<dyn Embedder>> {
        let embedder: Arc<dyn Embedder> = match self.provider {
            EmbeddingProvider::Ollama => {
                Arc::new(OllamaEmbedder::new(self.api_url.clone(), self.model.clone())?)
            }
            EmbeddingProvider::Hashing => Arc::new(HashingEmbedder::new(self.dimension)),
        };
        Ok(embedder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!("ollama".parse::<EmbeddingProvider>().unwrap(), EmbeddingProvider::Ollama);
        assert_eq!("Hashing".parse::<EmbeddingProvider>().unwrap(), EmbeddingProvider::Hashing);
        assert!("word2vec".parse::<EmbeddingProvider>().is_err());
    }

    #[test]
    fn test_build() {
        assert_eq!(EmbedderConfig::default().build().unwrap().name(), "OllamaEmbedder");
        assert_eq!(EmbedderConfig::hashing().build().unwrap().name(), "HashingEmbedder");
    }

    #[test]
    fn test_from_env_scenarios() {
        fn clear() {
            for var in ["EMBEDDING_PROVIDER", "EMBEDDING_MODEL", "EMBEDDING_API_URL"] {
                std::env::remove_var(var);
            }
        }

        clear();
        let config = EmbedderConfig::from_env().unwrap();
        assert_eq!(config.provider, EmbeddingProvider::Ollama);
        assert_eq!(config.model, "all-minilm");
        assert_eq!(config.api_url, DEFAULT_EMBEDDING_API_URL);

        std::env::set_var("EMBEDDING_PROVIDER", "hashing");
        std::env::set_var("EMBEDDING_MODEL", "nomic-embed-text");
        std::env::set_var("EMBEDDING_API_URL", "http://gpu-box:11434");
        let config = EmbedderConfig::from_env().unwrap();
        assert_eq!(config.provider, EmbeddingProvider::Hashing);
        assert_eq!(config.model, "nomic-embed-text");
        assert_eq!(config.api_url, "http://gpu-box:11434");

        std::env::set_var("EMBEDDING_PROVIDER", "bogus");
        assert!(EmbedderConfig::from_env().is_err());

        clear();
    }
}
