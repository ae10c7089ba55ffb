//! Complaint lookup tool.

use async_trait::async_trait;
use tracing::debug;

use crate::client::{ComplaintClient, ComplaintRecord, GetOutcome};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Action name the model uses for this tool.
pub const GET_COMPLAINT_TOOL: &str = "get_complaint_tool";

/// Looks up a complaint by its id.
///
/// Input is the id as a string. On success the output has one field per
/// line, the first being the `Complaint ID` line.
pub struct GetComplaintTool {
    client: ComplaintClient,
}

impl GetComplaintTool {
    pub fn new(client: ComplaintClient) -> Self {
        Self { client }
    }
}

fn format_record(record: &ComplaintRecord) -> String {
    format!(
        "📄 Complaint ID: {}\n\
         👤 Name: {}\n\
         📞 Phone: {}\n\
         📧 Email: {}\n\
         📝 Details: {}\n\
         🕒 Created At: {}",
        record.complaint_id,
        record.name,
        record.phone_number,
        record.email,
        record.complaint_details,
        record.created_at
    )
}

#[async_trait]
impl Tool for GetComplaintTool {
    fn name(&self) -> &str {
        GET_COMPLAINT_TOOL
    }

    fn description(&self) -> &str {
        "Retrieve a complaint's details. Input: the complaint ID."
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let complaint_id = args.input_str()?;
        if complaint_id.is_empty() {
            return Err(ToolError::MissingParameter("complaint_id".to_string()));
        }

        debug!("Looking up complaint '{}'", complaint_id);

        match self.client.get(&complaint_id).await? {
            GetOutcome::Found(record) => Ok(ToolOutput::success(format_record(&record))),
            GetOutcome::NotFound { status } => Ok(ToolOutput::failure(format!(
                "❌ Complaint not found or server error (status code: {})",
                status
            ))),
        }
    }
}
