//! Conversational agent for the complaint assistant.
//!
//! A [`ComplaintAgent`] runs one turn at a time against a caller-owned
//! [`ChatSession`]:
//!
//! ```text
//! user input
//!     ↓
//! ┌──────────────────────────────────────────────────────┐
//! │  1. Model: system prompt + history + input → text    │
//! │         ↓                                            │
//! │  2. Dispatch: decode text into a Command             │
//! │     • Tool(call)  → run the tool, format its output  │
//! │     • Reply(_)    → show the model's text as is      │
//! │         ↓                                            │
//! │  3. Append (input, reply) to the session             │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use agent::{AgentConfig, ComplaintAgent};
//! use agent::ChatSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let agent = ComplaintAgent::build(AgentConfig::from_env()?).await?;
//!     let mut session = ChatSession::new();
//!
//!     let reply = agent.run(&mut session, "I want to file a complaint.").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

mod agent;
mod command;
mod config;
mod error;
mod formatting;
mod prompt;

pub use agent::{ComplaintAgent, TurnState};
pub use command::{Command, NoToolCall, ToolCall};
pub use config::{AgentConfig, DEFAULT_KB_PATH};
pub use error::AgentError;
pub use formatting::{format_tool_reply, APOLOGY};
pub use prompt::{load_system_prompt, DEFAULT_PROMPT_FILE, DEFAULT_SYSTEM_PROMPT};

pub use brain_core::ChatSession;
