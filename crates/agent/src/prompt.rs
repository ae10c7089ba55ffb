//! System prompt for the complaint agent.

use std::env;
use std::path::Path;

use tracing::info;

/// File checked for a prompt override when `AGENT_PROMPT_FILE` is unset.
pub const DEFAULT_PROMPT_FILE: &str = "AGENT_PROMPT.md";

/// Built-in instructions: collect the four complaint fields, then emit the
/// tool JSON the dispatcher understands.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a helpful and professional customer support assistant. Your job is to:

1. File complaints by collecting user information:
- name
- 10-digit Indian phone number
- valid email address
- complaint details

If any information is missing, ask politely for it. Once you have all details, output the following JSON to call the complaint creation tool:
{
"action": "create_complaint_tool",
"input": "name, phone, email, complaint details"
}

2. Retrieve complaint details if the user gives a complaint ID, using this JSON format:
{
"action": "get_complaint_tool",
"input": "complaint_id"
}

3. If the user asks a general question about our services or policies, look it up in the knowledge base with this JSON format:
{
"action": "GeneralQA",
"input": "the user's question"
}

4. If no tool is needed, simply respond directly.

Always format JSON properly on a new line. Never explain the JSON. Just return it clearly so the system can parse it.

Example:
User: I want to file a complaint.
You: I'd be happy to help. May I know your name?

Once all fields are collected:
{
"action": "create_complaint_tool",
"input": "Deepak, 9876543210, deepak@example.com, My order was delayed"
}"#;

/// Load the agent's system prompt.
///
/// Priority:
/// 1. `AGENT_SYSTEM_PROMPT` env var (inline prompt)
/// 2. `AGENT_PROMPT_FILE` env var (path to file)
/// 3. `AGENT_PROMPT.md` in the working directory
/// 4. Embedded default
pub fn load_system_prompt() -> String {
    if let Ok(prompt) = env::var("AGENT_SYSTEM_PROMPT") {
        if !prompt.trim().is_empty() {
            info!("Using agent prompt from AGENT_SYSTEM_PROMPT env var");
            return prompt.trim().to_string();
        }
    }

    let prompt_file =
        env::var("AGENT_PROMPT_FILE").unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());

    if let Some(prompt) = load_prompt_file(&prompt_file) {
        info!("Loaded agent prompt from {}", prompt_file);
        return prompt;
    }

    info!("Using embedded default agent prompt");
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path.as_ref()).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
