//! Agent configuration.

use std::env;
use std::path::PathBuf;

use agent_tools::DEFAULT_API_URL;
use knowledge::{EmbedderConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_TOP_K};
use llm_brain::{LlmBrainConfig, Provider};

use crate::error::AgentError;
use crate::prompt::{load_system_prompt, DEFAULT_SYSTEM_PROMPT};

/// Default location of the knowledge-base document.
pub const DEFAULT_KB_PATH: &str = "knowledge-base/faq.txt";

/// Everything needed to build a [`ComplaintAgent`](crate::ComplaintAgent).
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model backend.
    pub llm: LlmBrainConfig,
    /// Base URL of the complaint API.
    pub api_url: String,
    /// Instructions sent as the first message of every turn.
    pub system_prompt: String,
    /// Knowledge-base document.
    pub kb_path: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Chunks passed to the QA prompt.
    pub top_k: usize,
    /// Embedding backend for the knowledge base.
    pub embedder: EmbedderConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            llm: LlmBrainConfig::default(),
            api_url: DEFAULT_API_URL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            kb_path: PathBuf::from(DEFAULT_KB_PATH),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            top_k: DEFAULT_TOP_K,
            embedder: EmbedderConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads the `LLM_*` and `EMBEDDING_*` variables through their own
    /// configs, plus:
    /// - `COMPLAINT_API_URL` - Complaint API base URL (default: http://localhost:8000)
    /// - `KB_PATH` - Knowledge-base document (default: knowledge-base/faq.txt)
    /// - `KB_CHUNK_SIZE` / `KB_CHUNK_OVERLAP` - Splitter settings (default: 500 / 50)
    /// - `KB_TOP_K` - Chunks per question (default: 4)
    ///
    /// With an Ollama model and no `EMBEDDING_API_URL`, embeddings use the
    /// model server's URL.
    pub fn from_env() -> Result<Self, AgentError> {
        let llm = LlmBrainConfig::from_env()?;
        let mut embedder = EmbedderConfig::from_env()?;
        if llm.provider == Provider::Ollama && env::var("EMBEDDING_API_URL").is_err() {
            embedder.api_url = llm.api_url.clone();
        }

        let mut config = Self {
            llm,
            embedder,
            system_prompt: load_system_prompt(),
            ..Self::default()
        };

        if let Ok(url) = env::var("COMPLAINT_API_URL") {
            config.api_url = url;
        }
        if let Ok(path) = env::var("KB_PATH") {
            config.kb_path = PathBuf::from(path);
        }
        if let Some(size) = parse_env("KB_CHUNK_SIZE")? {
            config.chunk_size = size;
        }
        if let Some(overlap) = parse_env("KB_CHUNK_OVERLAP")? {
            config.chunk_overlap = overlap;
        }
        if let Some(top_k) = parse_env("KB_TOP_K")? {
            config.top_k = top_k;
        }

        Ok(config)
    }
}

fn parse_env(name: &str) -> Result<Option<usize>, AgentError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            AgentError::Configuration(format!("{} must be a number, got {:?}", name, value))
        }),
        Err(_) => Ok(None),
    }
}
