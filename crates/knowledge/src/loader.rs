//! Document loading.

use std::path::Path;

use tracing::info;

use crate::error::{KnowledgeError, Result};

/// Read a UTF-8 text document.
///
/// A document that is blank after trimming is rejected with
/// [`KnowledgeError::EmptyDocument`].
pub async fn load_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    if text.trim().is_empty() {
        return Err(KnowledgeError::EmptyDocument(path.to_path_buf()));
    }

    info!(
        "Loaded knowledge document {} ({} chars)",
        path.display(),
        text.chars().count()
    );
    Ok(text)
}
