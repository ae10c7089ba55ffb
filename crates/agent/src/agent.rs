//! The complaint agent: one model call, then at most one tool call.

use std::sync::Arc;

use agent_tools::{default_registry, ComplaintClient, ToolOutput, ToolRegistry};
use brain_core::{hash_prompt, Brain, ChatMessage, ChatSession};
use knowledge::{KnowledgeRetriever, TextSplitter};
use tracing::{debug, info, warn};

use crate::command::{Command, NoToolCall};
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::formatting::{format_tool_reply, APOLOGY};

/// Everything that happened in one turn.
#[derive(Debug, Clone)]
pub struct TurnState {
    /// What the user said.
    pub user_input: String,
    /// Session history before this turn.
    pub chat_history: Vec<ChatMessage>,
    /// The model's reply, trimmed.
    pub llm_output: String,
    /// The reply shown to the user.
    pub final_output: String,
    /// Output of the tool, when one ran without error.
    pub tool_output: Option<ToolOutput>,
}

/// Conversational agent for filing and looking up complaints.
///
/// Each turn asks the model for a reply given the system prompt and the
/// session so far. If the reply carries a tool call, the tool runs and its
/// output is turned into the user-facing reply; otherwise the model's reply
/// is shown as is.
pub struct ComplaintAgent {
    brain: Arc<dyn Brain>,
    tools: ToolRegistry,
    system_prompt: String,
}

impl ComplaintAgent {
    pub fn new(
        brain: Arc<dyn Brain>,
        tools: ToolRegistry,
        system_prompt: impl Into<String>,
    ) -> Self {
        let system_prompt = system_prompt.into();
        info!(
            "Agent ready: brain={}, tools={:?}, prompt_hash={}",
            brain.name(),
            tools.list_tools(),
            hash_prompt(&system_prompt)
        );
        Self {
            brain,
            tools,
            system_prompt,
        }
    }

    /// Build the model client, knowledge base and tools from `config`.
    ///
    /// The knowledge base is loaded and embedded here; any failure is fatal.
    pub async fn build(config: AgentConfig) -> Result<Self, AgentError> {
        let brain = llm_brain::build_brain(config.llm.clone())?;

        let splitter = TextSplitter::new(config.chunk_size, config.chunk_overlap)?;
        let embedder = config.embedder.build()?;
        let retriever = KnowledgeRetriever::build(&config.kb_path, &splitter, embedder)
            .await?
            .with_top_k(config.top_k);

        let client = ComplaintClient::new(&config.api_url)
            .map_err(|e| AgentError::Configuration(e.to_string()))?;

        let mut tools = default_registry(client, Some(Arc::new(retriever)));
        tools.set_brain(brain.clone());

        Ok(Self::new(brain, tools, config.system_prompt))
    }

    /// The registered tools.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Whether the model backend answers.
    pub async fn is_ready(&self) -> bool {
        self.brain.is_ready().await
    }

    /// Run one turn and return its reply.
    pub async fn run(
        &self,
        session: &mut ChatSession,
        user_input: &str,
    ) -> Result<String, AgentError> {
        Ok(self.run_turn(session, user_input).await?.final_output)
    }

    /// Run one turn and return its full state.
    ///
    /// On success the user input and the final reply are appended to
    /// `session`. A model failure is returned and leaves `session` as it was.
    pub async fn run_turn(
        &self,
        session: &mut ChatSession,
        user_input: &str,
    ) -> Result<TurnState, AgentError> {
        let chat_history = session.messages().to_vec();

        let mut messages = Vec::with_capacity(chat_history.len() + 2);
        messages.push(ChatMessage::system(self.system_prompt.as_str()));
        messages.extend(chat_history.iter().cloned());
        messages.push(ChatMessage::user(user_input));

        let llm_output = self.brain.complete(&messages).await?.trim().to_string();
        debug!("Model output: {} chars", llm_output.len());

        let (final_output, tool_output) = self.dispatch(&llm_output).await;

        session.add_exchange(user_input, final_output.as_str());

        Ok(TurnState {
            user_input: user_input.to_string(),
            chat_history,
            llm_output,
            final_output,
            tool_output,
        })
    }

    async fn dispatch(&self, llm_output: &str) -> (String, Option<ToolOutput>) {
        let call = match Command::decode(llm_output) {
            Command::Tool(call) => call,
            Command::Reply(reason) => {
                debug!("No tool call ({}), replying directly", reason);
                return (llm_output.to_string(), None);
            }
        };

        let name = call.tool_name();
        if !self.tools.has_tool(name) {
            let reason = NoToolCall::UnknownAction(name.to_string());
            debug!("No tool call ({}), replying directly", reason);
            return (llm_output.to_string(), None);
        }

        info!("Executing tool: {}", name);
        match self.tools.execute(name, call.input().clone()).await {
            Ok(output) => {
                if !output.success {
                    info!("Tool {} reported failure: {}", name, output.content);
                }
                (format_tool_reply(&call, &output), Some(output))
            }
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                (APOLOGY.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_brain::ScriptedBrain;

    fn offline_tools() -> ToolRegistry {
        default_registry(ComplaintClient::new("http://127.0.0.1:1").unwrap(), None)
    }

    #[tokio::test]
    async fn test_messages_carry_prompt_and_history() {
        let brain = Arc::new(ScriptedBrain::new(["May I know your name?", "Thanks, Deepak."]));
        let agent = ComplaintAgent::new(brain.clone(), offline_tools(), "SYSTEM");
        let mut session = ChatSession::new();

        agent.run(&mut session, "I want to file a complaint.").await.unwrap();
        let state = agent.run_turn(&mut session, "Deepak").await.unwrap();

        assert_eq!(state.chat_history.len(), 2);
        assert_eq!(state.final_output, "Thanks, Deepak.");

        let calls = brain.calls().await;
        assert_eq!(
            calls[1],
            vec![
                ChatMessage::system("SYSTEM"),
                ChatMessage::user("I want to file a complaint."),
                ChatMessage::assistant("May I know your name?"),
                ChatMessage::user("Deepak"),
            ]
        );
        assert_eq!(session.turns(), 2);
        assert_eq!(session.last_reply(), Some("Thanks, Deepak."));
    }

    #[tokio::test]
    async fn test_unregistered_tool_replies_raw() {
        let raw = r#"{"action": "GeneralQA", "input": "What are your hours?"}"#;
        let brain = Arc::new(ScriptedBrain::new([raw]));
        let agent = ComplaintAgent::new(brain, offline_tools(), "SYSTEM");
        let mut session = ChatSession::new();

        let state = agent.run_turn(&mut session, "hours?").await.unwrap();
        assert_eq!(state.final_output, raw);
        assert!(state.tool_output.is_none());
    }

    #[tokio::test]
    async fn test_output_is_trimmed() {
        let brain = Arc::new(ScriptedBrain::new(["  Hello!  \n"]));
        let agent = ComplaintAgent::new(brain, offline_tools(), "SYSTEM");
        let mut session = ChatSession::new();

        assert_eq!(agent.run(&mut session, "hi").await.unwrap(), "Hello!");
    }
}
