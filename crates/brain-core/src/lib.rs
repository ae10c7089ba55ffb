//! Core trait and types for brain implementations.
//!
//! This crate provides the shared interface between the complaint agent and
//! whatever language model sits behind it. It defines:
//!
//! - [`Brain`] - The trait that all model backends implement
//! - [`ChatMessage`] / [`Role`] - One message of a conversation
//! - [`ChatSession`] - The append-only history of one chat, owned by the caller
//! - [`BrainError`] - Error types for brain operations
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, Brain, BrainError, ChatMessage};
//!
//! struct MyBrain;
//!
//! #[async_trait]
//! impl Brain for MyBrain {
//!     async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BrainError> {
//!         Ok(format!("You sent {} messages", messages.len()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBrain"
//!     }
//! }
//! ```

mod error;
mod message;
mod prompt;
mod session;
mod trait_def;

pub use error::BrainError;
pub use message::{ChatMessage, Role};
pub use prompt::hash_prompt;
pub use session::ChatSession;
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
