//! Scripted brain implementation - replays canned replies in order.

use std::collections::VecDeque;

use async_trait::async_trait;
use brain_core::{Brain, BrainError, ChatMessage};
use tokio::sync::Mutex;

/// One scripted step: a reply or a failure.
#[derive(Debug, Clone)]
enum Step {
    Reply(String),
    Fail(String),
}

/// A brain that answers from a fixed script and records every request.
///
/// Each call to [`Brain::complete`] pops the next step. Running past the end
/// of the script is an error, which makes unexpected extra model calls show
/// up in tests.
#[derive(Debug, Default)]
pub struct ScriptedBrain {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBrain {
    /// Create a brain that returns `replies` in order.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = replies.into_iter().map(|r| Step::Reply(r.into())).collect();
        Self {
            steps: Mutex::new(steps),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Append a reply to the script.
    pub fn then_reply(mut self, reply: impl Into<String>) -> Self {
        self.steps.get_mut().push_back(Step::Reply(reply.into()));
        self
    }

    /// Append a failure to the script.
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.steps.get_mut().push_back(Step::Fail(message.into()));
        self
    }

    /// Every message sequence this brain has been asked to complete.
    pub async fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().await.clone()
    }

    /// Number of completed or failed calls so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Number of steps not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.steps.lock().await.len()
    }
}

#[async_trait]
impl Brain for ScriptedBrain {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BrainError> {
        self.calls.lock().await.push(messages.to_vec());

        match self.steps.lock().await.pop_front() {
            Some(Step::Reply(reply)) => Ok(reply),
            Some(Step::Fail(message)) => Err(BrainError::Unavailable(message)),
            None => Err(BrainError::ProcessingFailed(
                "script exhausted".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order_then_exhausts() {
        let brain = ScriptedBrain::new(["one", "two"]);
        let messages = [ChatMessage::user("hi")];

        assert_eq!(brain.complete(&messages).await.unwrap(), "one");
        assert_eq!(brain.complete(&messages).await.unwrap(), "two");
        assert!(matches!(
            brain.complete(&messages).await,
            Err(BrainError::ProcessingFailed(_))
        ));
        assert_eq!(brain.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let brain = ScriptedBrain::new(["ok"]).then_fail("model offline");
        let messages = [ChatMessage::user("hi")];

        assert_eq!(brain.complete(&messages).await.unwrap(), "ok");
        match brain.complete(&messages).await {
            Err(BrainError::Unavailable(msg)) => assert_eq!(msg, "model offline"),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_records_calls() {
        let brain = ScriptedBrain::new(Vec::<String>::new()).then_reply("answer");
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("question")];

        brain.complete(&messages).await.unwrap();

        let calls = brain.calls().await;
        assert_eq!(calls, vec![messages]);
        assert_eq!(brain.remaining().await, 0);
    }
}
