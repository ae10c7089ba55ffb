//! The Brain trait definition.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::message::ChatMessage;

/// A language model that turns a message sequence into a reply.
///
/// Implementations range from scripted test doubles to HTTP clients for a
/// local or hosted model. This trait is object-safe and can be used with
/// `Arc<dyn Brain>`.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Generate the assistant's reply to `messages`.
    ///
    /// The messages are sent in order; a leading `system` message carries
    /// the instructions.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BrainError>;

    /// Get a human-readable name for this brain implementation.
    fn name(&self) -> &str;

    /// Check if the brain is ready to process messages.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
