//! Mock brain implementations for testing the complaint agent.
//!
//! This crate provides mock implementations of the `Brain` trait:
//! - `EchoBrain` - Echoes the latest user message back
//! - `ScriptedBrain` - Replays canned replies and records what it was sent
//!
//! For a real model, use the `llm-brain` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, ChatMessage, ScriptedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = ScriptedBrain::new([r#"{"action": "Final Answer", "input": "Hi!"}"#]);
//!
//!     let reply = brain.complete(&[ChatMessage::user("Hello")]).await?;
//!     assert!(reply.contains("Final Answer"));
//!     Ok(())
//! }
//! ```

mod echo;
mod scripted;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, ChatMessage, Role};

pub use echo::EchoBrain;
pub use scripted::ScriptedBrain;
