//! Conversation session.
//!
//! A [`ChatSession`] is the history of one chat. It is a plain value owned by
//! whoever drives the conversation (the chat front end, a test) and is lent
//! to the agent for each turn, so there is no hidden shared memory.

use crate::message::ChatMessage;

/// Ordered, append-only history of user and assistant messages.
///
/// # Example
///
/// ```rust
/// use brain_core::{ChatSession, Role};
///
/// let mut session = ChatSession::new();
/// session.add_exchange("Hello", "Hi there!");
/// session.add_exchange("How are you?", "I'm doing well!");
///
/// assert_eq!(session.len(), 4); // 2 turns = 4 messages
/// assert_eq!(session.messages()[0].role, Role::User);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message and the assistant's reply.
    pub fn add_exchange(&mut self, user_msg: impl Into<String>, assistant_msg: impl Into<String>) {
        self.messages.push(ChatMessage::user(user_msg));
        self.messages.push(ChatMessage::assistant(assistant_msg));
    }

    /// Number of completed turns (user + assistant pairs).
    pub fn turns(&self) -> usize {
        self.messages.len() / 2
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant reply, if any.
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::Role::Assistant)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn test_add_exchange_preserves_order_and_roles() {
        let mut session = ChatSession::new();

        session.add_exchange("Hello", "Hi there!");
        session.add_exchange("How are you?", "I'm doing well!");

        let messages = session.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "Hello");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "Hi there!");
        assert_eq!(messages[2].content, "How are you?");
        assert_eq!(session.turns(), 2);
        assert_eq!(session.last_reply(), Some("I'm doing well!"));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = ChatSession::new();
        let mut b = ChatSession::new();

        a.add_exchange("Hello A", "Hi A!");
        b.add_exchange("Hello B", "Hi B!");
        b.add_exchange("Again", "Yes?");

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 4);
        assert_eq!(a.messages()[0].content, "Hello A");
    }

    #[test]
    fn test_empty_session() {
        let session = ChatSession::new();
        assert!(session.is_empty());
        assert_eq!(session.turns(), 0);
        assert!(session.last_reply().is_none());
    }
}
