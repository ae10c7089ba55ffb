//! User-facing replies built from tool output.

use agent_tools::ToolOutput;

use crate::command::ToolCall;

/// Reply used when a tool call fails outright.
pub const APOLOGY: &str =
    "⚠️ Something went wrong while processing your request. Please try again later.";

const NOT_FOUND_REPLY: &str =
    "❌ Sorry, I couldn't find a complaint with that ID. Please double-check and try again.";

/// Turn a tool's output into the reply for the call that produced it.
pub fn format_tool_reply(call: &ToolCall, output: &ToolOutput) -> String {
    match call {
        ToolCall::CreateComplaint(_) => format_create(output),
        ToolCall::GetComplaint(_) => format_get(output),
        ToolCall::GeneralQa(_) => output.content.clone(),
    }
}

fn format_create(output: &ToolOutput) -> String {
    if !output.success {
        return format!(
            "❌ Your complaint could not be registered. {}",
            output.content
        );
    }

    format!(
        "✅ Your complaint has been registered successfully. We’ll get back to you shortly. Here is your complaint ID: {}",
        complaint_id_from(&output.content)
    )
}

fn format_get(output: &ToolOutput) -> String {
    if !output.content.contains("Complaint ID") {
        return NOT_FOUND_REPLY.to_string();
    }

    let details = output.content.lines().skip(1).collect::<Vec<_>>().join("\n");
    format!("Here are the details of your complaint:\n\n{}", details)
}

/// Pull the id out of `"... (ID: AB12CD34)"`, falling back to the text
/// after the last colon.
fn complaint_id_from(content: &str) -> &str {
    if let Some(start) = content.rfind("(ID:") {
        let rest = &content[start + "(ID:".len()..];
        let end = rest.find(')').unwrap_or(rest.len());
        return rest[..end].trim();
    }

    content
        .rsplit(':')
        .next()
        .unwrap_or(content)
        .trim()
        .trim_end_matches(')')
}
