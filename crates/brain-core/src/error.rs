//! Error types for brain operations.

use thiserror::Error;

/// Errors that can occur while talking to a language model.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The brain is misconfigured (missing key, bad URL, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The model endpoint could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The model answered with an error or an unusable response.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The brain is temporarily unavailable.
    #[error("brain unavailable: {0}")]
    Unavailable(String),
}
