//! Complaint creation tool.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::client::{ComplaintClient, CreateOutcome, NewComplaintRequest};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Action name the model uses for this tool.
pub const CREATE_COMPLAINT_TOOL: &str = "create_complaint_tool";

const WRONG_FIELD_COUNT: &str =
    "❌ Please provide exactly 4 comma-separated fields: name, phone, email, details.";

/// Files a new complaint through the complaint API.
///
/// # Input
///
/// A single string of four comma-separated values:
///
/// ```text
/// "Deepak, 9876543210, deepak@example.com, Order not delivered"
/// ```
///
/// Only the first three commas delimit fields, so the details may contain
/// commas. An object with `name`, `phone_number`, `email` and
/// `complaint_details` is accepted too.
pub struct CreateComplaintTool {
    client: ComplaintClient,
}

impl CreateComplaintTool {
    pub fn new(client: ComplaintClient) -> Self {
        Self { client }
    }
}

/// Parse the tool input, or `None` when the four fields are not all there.
fn parse_input(input: &Value) -> Result<Option<NewComplaintRequest>, ToolError> {
    match input {
        Value::String(s) => {
            let parts: Vec<&str> = s.splitn(4, ',').map(str::trim).collect();
            if parts.len() != 4 || parts.iter().any(|p| p.is_empty()) {
                return Ok(None);
            }
            Ok(Some(NewComplaintRequest {
                name: parts[0].to_string(),
                phone_number: parts[1].to_string(),
                email: parts[2].to_string(),
                complaint_details: parts[3].to_string(),
            }))
        }
        Value::Object(map) => {
            let field = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            match (
                field("name"),
                field("phone_number"),
                field("email"),
                field("complaint_details"),
            ) {
                (Some(name), Some(phone_number), Some(email), Some(complaint_details)) => {
                    Ok(Some(NewComplaintRequest {
                        name,
                        phone_number,
                        email,
                        complaint_details,
                    }))
                }
                _ => Ok(None),
            }
        }
        Value::Null => Err(ToolError::MissingParameter("input".to_string())),
        _ => Err(ToolError::InvalidParameter {
            name: "input".to_string(),
            reason: "expected a comma-separated string".to_string(),
        }),
    }
}

#[async_trait]
impl Tool for CreateComplaintTool {
    fn name(&self) -> &str {
        CREATE_COMPLAINT_TOOL
    }

    fn description(&self) -> &str {
        "Create a new complaint. Input: \"name, phone_number, email, complaint_details\"."
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let Some(request) = parse_input(&args.input)? else {
            return Ok(ToolOutput::failure(WRONG_FIELD_COUNT));
        };

        debug!("Filing complaint for '{}'", request.name);

        match self.client.create(&request).await? {
            CreateOutcome::Created(receipt) => Ok(ToolOutput::success(format!(
                "✅ {} (ID: {})",
                receipt.message, receipt.complaint_id
            ))),
            CreateOutcome::Rejected { status, detail } => Ok(ToolOutput::failure(format!(
                "❌ API error {}: {}",
                status, detail
            ))),
        }
    }
}
