//! Error types for tool operations.

use brain_core::BrainError;
use knowledge::KnowledgeError;
use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// A tool that ran and got a negative answer (validation rejected, record
/// not found) returns a failed [`ToolOutput`](crate::ToolOutput) instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General execution error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Brain processing error.
    #[error("Brain error: {0}")]
    Brain(#[from] BrainError),

    /// Knowledge-base lookup failed.
    #[error("Knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),
}
