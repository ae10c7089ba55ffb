//! Tool registry and implementations for the complaint assistant.
//!
//! This crate provides a `ToolRegistry` for registering and executing the
//! tools the conversational agent can call. A tool takes the `input` value
//! of the model's JSON tool call and returns a text [`ToolOutput`].
//!
//! # Built-in Tools
//!
//! - [`CreateComplaintTool`] (`create_complaint_tool`) - file a complaint via the API.
//! - [`GetComplaintTool`] (`get_complaint_tool`) - look a complaint up by id.
//! - [`GeneralQaTool`] (`GeneralQA`) - answer from the knowledge base.
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_tools::{ComplaintClient, CreateComplaintTool, ToolRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), agent_tools::ToolError> {
//!     let client = ComplaintClient::new("http://localhost:8000")?;
//!     let mut registry = ToolRegistry::new();
//!     registry.register(CreateComplaintTool::new(client));
//!
//!     let result = registry
//!         .execute(
//!             "create_complaint_tool",
//!             json!("Deepak, 9876543210, deepak@example.com, Order not delivered"),
//!         )
//!         .await?;
//!     println!("{}", result.content); // "✅ Complaint created successfully (ID: ...)"
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod registry;
mod tool;
pub mod tools;

use std::sync::Arc;

use knowledge::KnowledgeRetriever;

pub use client::{
    ComplaintClient, ComplaintReceipt, ComplaintRecord, CreateOutcome, GetOutcome,
    NewComplaintRequest, DEFAULT_API_URL,
};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{
    CreateComplaintTool, GeneralQaTool, GetComplaintTool, CREATE_COMPLAINT_TOOL, GENERAL_QA_TOOL,
    GET_COMPLAINT_TOOL,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a registry with the complaint tools registered.
///
/// `GeneralQA` is registered when a retriever is given. It needs a brain;
/// call `registry.set_brain(brain)` before dispatching to it.
pub fn default_registry(
    client: ComplaintClient,
    retriever: Option<Arc<KnowledgeRetriever>>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(CreateComplaintTool::new(client.clone()));
    registry.register(GetComplaintTool::new(client));

    if let Some(retriever) = retriever {
        registry.register(GeneralQaTool::new(retriever));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let client = ComplaintClient::new(DEFAULT_API_URL).unwrap();
        let registry = default_registry(client, None);
        assert_eq!(
            registry.list_tools(),
            vec![CREATE_COMPLAINT_TOOL, GET_COMPLAINT_TOOL]
        );
    }
}
