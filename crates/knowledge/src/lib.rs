//! Knowledge base for the complaint assistant.
//!
//! A single text document (an FAQ, a policy sheet) is loaded at startup,
//! split into overlapping chunks, embedded, and held in memory for
//! similarity search:
//!
//! - [`load_document`] - read the document
//! - [`TextSplitter`] - paragraph-aware chunking
//! - [`Embedder`] - [`OllamaEmbedder`] or the offline [`HashingEmbedder`]
//! - [`VectorIndex`] - cosine-similarity search
//! - [`KnowledgeRetriever`] - all of the above behind one type
//!
//! # Example
//!
//! ```rust,no_run
//! use knowledge::{EmbedderConfig, KnowledgeRetriever, TextSplitter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), knowledge::KnowledgeError> {
//!     let embedder = EmbedderConfig::from_env()?.build()?;
//!     let retriever =
//!         KnowledgeRetriever::build("knowledge-base/faq.txt", &TextSplitter::default(), embedder)
//!             .await?;
//!
//!     for hit in retriever.similarity_search("refund timeline", 4).await? {
//!         println!("{:.3} {}", hit.score, hit.text);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod embedder;
mod error;
mod index;
mod loader;
mod retriever;
mod splitter;

pub use config::{EmbedderConfig, EmbeddingProvider, DEFAULT_EMBEDDING_API_URL};
pub use embedder::{
    Embedder, HashingEmbedder, OllamaEmbedder, DEFAULT_EMBEDDING_MODEL, DEFAULT_HASHING_DIMENSION,
};
pub use error::{KnowledgeError, Result};
pub use index::{cosine_similarity, ScoredChunk, VectorIndex};
pub use loader::load_document;
pub use retriever::{KnowledgeRetriever, DEFAULT_TOP_K};
pub use splitter::{TextSplitter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATOR};
