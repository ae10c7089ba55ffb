//! Similarity search over a single knowledge document.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::embedder::Embedder;
use crate::error::{KnowledgeError, Result};
use crate::index::{ScoredChunk, VectorIndex};
use crate::loader::load_document;
use crate::splitter::TextSplitter;

/// Default number of chunks returned per query.
pub const DEFAULT_TOP_K: usize = 4;

/// Chunks embedded per request to the embedder.
const EMBED_BATCH_SIZE: usize = 64;

/// A document split into chunks, embedded, and indexed for search.
///
/// Built once at startup and read-only afterwards.
pub struct KnowledgeRetriever {
    index: VectorIndex,
    embedder: Arc<dyn Embedder>,
    top_k: usize,
}

impl std::fmt::Debug for KnowledgeRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeRetriever")
            .field("chunks", &self.index.len())
            .field("embedder", &self.embedder.name())
            .field("top_k", &self.top_k)
            .finish()
    }
}

impl KnowledgeRetriever {
    /// Load the document at `path`, split it, and index every chunk.
    pub async fn build(
        path: impl AsRef<Path>,
        splitter: &TextSplitter,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = load_document(path).await?;
        let retriever = Self::from_text(&text, splitter, embedder).await?;
        info!(
            "Indexed {} chunks from {} with {}",
            retriever.len(),
            path.display(),
            retriever.embedder.name()
        );
        Ok(retriever)
    }

    /// Index already-loaded text.
    pub async fn from_text(
        text: &str,
        splitter: &TextSplitter,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self> {
        let chunks = splitter.split(text);
        if chunks.is_empty() {
            return Err(KnowledgeError::InvalidConfig(
                "document produced no chunks".to_string(),
            ));
        }

        let mut index = VectorIndex::new();
        for batch in chunks.chunks(EMBED_BATCH_SIZE) {
            let vectors = embedder.embed(batch).await?;
            if vectors.len() != batch.len() {
                return Err(KnowledgeError::Embedding(format!(
                    "expected {} embeddings, got {}",
                    batch.len(),
                    vectors.len()
                )));
            }
            for (chunk, vector) in batch.iter().zip(vectors) {
                index.insert(chunk.clone(), vector);
            }
        }

        Ok(Self {
            index,
            embedder,
            top_k: DEFAULT_TOP_K,
        })
    }

    /// Set how many chunks [`search`](Self::search) returns.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k.max(1);
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Return the `k` chunks most similar to `query`, best first.
    pub async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>> {
        let query_vectors = self.embedder.embed(&[query.to_string()]).await?;
        let query_vector = query_vectors
            .into_iter()
            .next()
            .ok_or_else(|| KnowledgeError::Embedding("no embedding for query".to_string()))?;

        let results = self.index.search(&query_vector, k);
        debug!(
            "Similarity search returned {} chunks (best score: {:?})",
            results.len(),
            results.first().map(|r| r.score)
        );
        Ok(results)
    }

    /// [`similarity_search`](Self::similarity_search) with the configured top-k.
    pub async fn search(&self, query: &str) -> Result<Vec<ScoredChunk>> {
        self.similarity_search(query, self.top_k).await
    }
}
