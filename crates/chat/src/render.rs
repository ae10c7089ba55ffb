//! Terminal rendering of chat messages.

use agent::ChatSession;
use brain_core::Role;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// An assistant message split into what is shown and the model's reasoning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReply {
    pub visible: String,
    pub thought: Option<String>,
}

/// Split `<think>…</think>` blocks out of an assistant message.
///
/// Every complete block is removed from the visible text; the first block's
/// content is the thought. An unclosed `<think>` is left in place.
pub fn split_thoughts(content: &str) -> SplitReply {
    let mut visible = String::with_capacity(content.len());
    let mut thought = None;
    let mut rest = content;

    while let Some(start) = rest.find(THINK_OPEN) {
        let after_open = &rest[start + THINK_OPEN.len()..];
        let Some(end) = after_open.find(THINK_CLOSE) else {
            break;
        };

        visible.push_str(&rest[..start]);
        if thought.is_none() {
            thought = Some(after_open[..end].trim().to_string());
        }
        rest = &after_open[end + THINK_CLOSE.len()..];
    }
    visible.push_str(rest);

    SplitReply {
        visible: visible.trim().to_string(),
        thought: thought.filter(|t| !t.is_empty()),
    }
}

/// Render an assistant message for the terminal.
pub fn render_reply(content: &str, show_thoughts: bool) -> String {
    let reply = split_thoughts(content);
    match reply.thought {
        Some(thought) if show_thoughts => {
            format!("🧠 {}\n\nAssistant: {}", thought, reply.visible)
        }
        _ => format!("Assistant: {}", reply.visible),
    }
}

/// Render the whole session, oldest message first.
pub fn render_history(session: &ChatSession, show_thoughts: bool) -> String {
    if session.is_empty() {
        return "(no messages yet)".to_string();
    }

    session
        .messages()
        .iter()
        .map(|message| match message.role {
            Role::User => format!("You: {}", message.content),
            _ => render_reply(&message.content, show_thoughts),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
