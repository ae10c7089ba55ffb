//! Error types for agent operations.

use brain_core::BrainError;
use knowledge::KnowledgeError;
use thiserror::Error;

/// Errors that end a turn or prevent the agent from starting.
///
/// Tool failures are not here: they become an apology reply.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The model call failed.
    #[error("brain error: {0}")]
    Brain(#[from] BrainError),

    /// The knowledge base could not be built.
    #[error("knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
