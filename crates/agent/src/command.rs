//! Decoding the model's reply into a tool call or a plain answer.
//!
//! The model asks for a tool by emitting a JSON object somewhere in its
//! reply:
//!
//! ```text
//! {"action": "get_complaint_tool", "input": "AB12CD34"}
//! ```
//!
//! Anything else is a direct answer to the user.

use std::fmt;

use agent_tools::{CREATE_COMPLAINT_TOOL, GENERAL_QA_TOOL, GET_COMPLAINT_TOOL};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recognised tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "input")]
pub enum ToolCall {
    #[serde(rename = "create_complaint_tool")]
    CreateComplaint(Value),
    #[serde(rename = "get_complaint_tool")]
    GetComplaint(Value),
    #[serde(rename = "GeneralQA")]
    GeneralQa(Value),
}

impl ToolCall {
    /// Registry name of the tool this call targets.
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolCall::CreateComplaint(_) => CREATE_COMPLAINT_TOOL,
            ToolCall::GetComplaint(_) => GET_COMPLAINT_TOOL,
            ToolCall::GeneralQa(_) => GENERAL_QA_TOOL,
        }
    }

    /// The call's `input` value.
    pub fn input(&self) -> &Value {
        match self {
            ToolCall::CreateComplaint(input)
            | ToolCall::GetComplaint(input)
            | ToolCall::GeneralQa(input) => input,
        }
    }
}

/// Why a reply was not treated as a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoToolCall {
    /// The reply contains no `{`.
    NoJson,
    /// The text from the first `{` is not a valid JSON object.
    MalformedJson(String),
    /// The object has no string `action` field.
    MissingAction,
    /// The action names no known tool.
    UnknownAction(String),
}

impl fmt::Display for NoToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoToolCall::NoJson => f.write_str("no JSON object in reply"),
            NoToolCall::MalformedJson(e) => write!(f, "malformed JSON: {}", e),
            NoToolCall::MissingAction => f.write_str("JSON has no action"),
            NoToolCall::UnknownAction(action) => write!(f, "unknown action: {}", action),
        }
    }
}

/// What the agent should do with a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a tool and format its output.
    Tool(ToolCall),
    /// Show the model's reply as is.
    Reply(NoToolCall),
}

impl Command {
    /// Decode a raw model reply.
    ///
    /// The first `{` starts the candidate object; the balanced object from
    /// there is parsed and anything after it is ignored.
    pub fn decode(raw: &str) -> Self {
        let Some(start) = raw.find('{') else {
            return Command::Reply(NoToolCall::NoJson);
        };

        let json_str = extract_balanced_json(&raw[start..]);
        let object: Map<String, Value> = match serde_json::from_str(json_str) {
            Ok(object) => object,
            Err(e) => return Command::Reply(NoToolCall::MalformedJson(e.to_string())),
        };

        let Some(action) = object.get("action").and_then(Value::as_str) else {
            return Command::Reply(NoToolCall::MissingAction);
        };
        let input = object.get("input").cloned().unwrap_or(Value::Null);

        let tagged = serde_json::json!({ "action": action, "input": input });
        match serde_json::from_value::<ToolCall>(tagged) {
            Ok(call) => Command::Tool(call),
            Err(_) => Command::Reply(NoToolCall::UnknownAction(action.to_string())),
        }
    }
}

/// Cut a string that starts with `{` at its matching `}`.
///
/// Braces inside JSON strings are skipped. Unbalanced input is returned
/// unchanged so the parser reports it.
pub(crate) fn extract_balanced_json(s: &str) -> &str {
    if !s.starts_with('{') {
        return s;
    }

    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => {
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
            }
            '{' if !in_string => {
                depth += 1;
            }
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_create_with_leading_prose() {
        let raw = "Here you go:\n{\"action\": \"create_complaint_tool\", \"input\": \"Deepak, 9876543210, deepak@example.com, delayed order\"}";
        assert_eq!(
            Command::decode(raw),
            Command::Tool(ToolCall::CreateComplaint(json!(
                "Deepak, 9876543210, deepak@example.com, delayed order"
            )))
        );
    }

    #[test]
    fn test_decode_multiline_json() {
        let raw = "{\n  \"action\": \"get_complaint_tool\",\n  \"input\": \"AB12CD34\"\n}";
        let command = Command::decode(raw);
        assert_eq!(command, Command::Tool(ToolCall::GetComplaint(json!("AB12CD34"))));
        if let Command::Tool(call) = command {
            assert_eq!(call.tool_name(), "get_complaint_tool");
            assert_eq!(call.input(), &json!("AB12CD34"));
        }
    }

    #[test]
    fn test_decode_general_qa() {
        let raw = r#"{"action": "GeneralQA", "input": "What is the refund policy?"}"#;
        assert_eq!(
            Command::decode(raw),
            Command::Tool(ToolCall::GeneralQa(json!("What is the refund policy?")))
        );
    }

    #[test]
    fn test_decode_ignores_trailing_text() {
        let raw = r#"{"action": "get_complaint_tool", "input": "X1"} Let me check that for you."#;
        assert_eq!(
            Command::decode(raw),
            Command::Tool(ToolCall::GetComplaint(json!("X1")))
        );
    }

    #[test]
    fn test_decode_missing_input_is_null() {
        let raw = r#"{"action": "get_complaint_tool"}"#;
        assert_eq!(
            Command::decode(raw),
            Command::Tool(ToolCall::GetComplaint(Value::Null))
        );
    }

    #[test]
    fn test_decode_plain_text() {
        assert_eq!(
            Command::decode("May I know your name?"),
            Command::Reply(NoToolCall::NoJson)
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            Command::decode("Sure {not json at all"),
            Command::Reply(NoToolCall::MalformedJson(_))
        ));
        assert!(matches!(
            Command::decode(r#"{"action": "get_complaint_tool", "input": }"#),
            Command::Reply(NoToolCall::MalformedJson(_))
        ));
    }

    #[test]
    fn test_decode_missing_action() {
        assert_eq!(
            Command::decode(r#"{"input": "AB12CD34"}"#),
            Command::Reply(NoToolCall::MissingAction)
        );
        assert_eq!(
            Command::decode(r#"{"action": 7, "input": "AB12CD34"}"#),
            Command::Reply(NoToolCall::MissingAction)
        );
    }

    #[test]
    fn test_decode_unknown_action() {
        assert_eq!(
            Command::decode(r#"{"action": "delete_complaint_tool", "input": "AB12CD34"}"#),
            Command::Reply(NoToolCall::UnknownAction(
                "delete_complaint_tool".to_string()
            ))
        );
    }

    #[test]
    fn test_extract_balanced_json() {
        assert_eq!(extract_balanced_json(r#"{"a": 1}}}"#), r#"{"a": 1}"#);
        assert_eq!(
            extract_balanced_json(r#"{"a": "}{", "b": {"c": 2}} tail"#),
            r#"{"a": "}{", "b": {"c": 2}}"#
        );
        assert_eq!(
            extract_balanced_json(r#"{"a": "quote \" }"} x"#),
            r#"{"a": "quote \" }"}"#
        );
        assert_eq!(extract_balanced_json(r#"{"a": 1"#), r#"{"a": 1"#);
        assert_eq!(extract_balanced_json("no brace"), "no brace");
    }
}
