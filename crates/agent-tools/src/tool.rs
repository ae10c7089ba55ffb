//! Tool trait definition and types.

use std::sync::Arc;

use async_trait::async_trait;
use brain_core::Brain;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Clone)]
pub struct ToolArgs {
    /// The `input` value from the model's tool call, as decoded JSON.
    pub input: Value,
    /// Optional brain for tools that call the model themselves.
    pub brain: Option<Arc<dyn Brain>>,
}

impl ToolArgs {
    /// Create new tool arguments with the given input.
    pub fn new(input: impl Into<Value>) -> Self {
        Self {
            input: input.into(),
            brain: None,
        }
    }

    /// Create tool arguments with a brain for AI processing.
    pub fn with_brain(input: impl Into<Value>, brain: Arc<dyn Brain>) -> Self {
        Self {
            input: input.into(),
            brain: Some(brain),
        }
    }

    /// The input as a trimmed string.
    ///
    /// Numbers are accepted and rendered as text; null is a missing input.
    pub fn input_str(&self) -> Result<String, ToolError> {
        match &self.input {
            Value::String(s) => Ok(s.trim().to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Null => Err(ToolError::MissingParameter("input".to_string())),
            _ => Err(ToolError::InvalidParameter {
                name: "input".to_string(),
                reason: "expected string".to_string(),
            }),
        }
    }

    /// Get an optional string field of an object input.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.input.get(key)?.as_str().map(|s| s.to_string())
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result content (text).
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }
}

/// Trait for tools the agent can dispatch to.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (the `action` the model emits).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
