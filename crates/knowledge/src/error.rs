//! Error types for the knowledge base.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, indexing or searching the knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document has no text to index.
    #[error("document is empty: {0}")]
    EmptyDocument(PathBuf),

    /// The embedding backend failed or returned something unusable.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Splitter or retriever parameters are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, KnowledgeError>;
