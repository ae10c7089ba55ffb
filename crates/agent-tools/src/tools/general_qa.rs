//! Knowledge-base question answering tool.

use std::sync::Arc;

use async_trait::async_trait;
use brain_core::ChatMessage;
use knowledge::{KnowledgeRetriever, ScoredChunk};
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Action name the model uses for this tool.
pub const GENERAL_QA_TOOL: &str = "GeneralQA";

const QA_SYSTEM_PROMPT: &str = "Use the following pieces of context to answer the user's question. \
If you don't know the answer, just say that you don't know, don't try to make up an answer.";

/// Answers a question from the knowledge base.
///
/// The top chunks for the question are placed into a fixed QA prompt and
/// sent to the registry's shared brain. Input is the question string.
pub struct GeneralQaTool {
    retriever: Arc<KnowledgeRetriever>,
}

impl GeneralQaTool {
    pub fn new(retriever: Arc<KnowledgeRetriever>) -> Self {
        Self { retriever }
    }
}

/// Build the QA messages for `question` over `chunks`.
fn qa_messages(question: &str, chunks: &[ScoredChunk]) -> Vec<ChatMessage> {
    let context = chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    vec![
        ChatMessage::system(format!(
            "{}\n----------------\n{}",
            QA_SYSTEM_PROMPT, context
        )),
        ChatMessage::user(question),
    ]
}

#[async_trait]
impl Tool for GeneralQaTool {
    fn name(&self) -> &str {
        GENERAL_QA_TOOL
    }

    fn description(&self) -> &str {
        "Answer a general question from the knowledge base. Input: the question."
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let question = match args.input_str() {
            Ok(q) => q,
            Err(_) => args
                .get_string_opt("query")
                .or_else(|| args.get_string_opt("question"))
                .map(|q| q.trim().to_string())
                .ok_or_else(|| ToolError::MissingParameter("question".to_string()))?,
        };
        if question.is_empty() {
            return Err(ToolError::MissingParameter("question".to_string()));
        }

        let brain = args
            .brain
            .as_ref()
            .ok_or_else(|| ToolError::ExecutionFailed("GeneralQA requires a brain".to_string()))?;

        let chunks = self.retriever.search(&question).await?;
        debug!("GeneralQA retrieved {} chunks", chunks.len());

        let answer = brain.complete(&qa_messages(&question, &chunks)).await?;
        Ok(ToolOutput::success(answer.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::Role;

    #[test]
    fn test_qa_messages_stuff_context() {
        let chunks = vec![
            ScoredChunk {
                index: 0,
                text: "Refunds take 5-7 days.".to_string(),
                score: 0.9,
            },
            ScoredChunk {
                index: 2,
                text: "Refunds go to the original card.".to_string(),
                score: 0.5,
            },
        ];

        let messages = qa_messages("How long do refunds take?", &chunks);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.starts_with("Use the following pieces of context"));
        assert!(messages[0]
            .content
            .ends_with("Refunds take 5-7 days.\n\nRefunds go to the original card."));
        assert_eq!(messages[1], ChatMessage::user("How long do refunds take?"));
    }
}
