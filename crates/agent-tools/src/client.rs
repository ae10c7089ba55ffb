//! HTTP client for the complaint API.

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ToolError;

/// Default base URL of the complaint API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Body of `POST /complaints`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComplaintRequest {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub complaint_details: String,
}

/// Successful response to `POST /complaints`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComplaintReceipt {
    pub complaint_id: String,
    pub message: String,
}

/// A stored complaint as returned by `GET /complaints/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComplaintRecord {
    pub complaint_id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub complaint_details: String,
    pub created_at: String,
}

/// Result of a create call that reached the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(ComplaintReceipt),
    /// Any non-200 answer; `detail` is the raw response body.
    Rejected { status: u16, detail: String },
}

/// Result of a lookup that reached the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetOutcome {
    Found(ComplaintRecord),
    /// 404 or any other non-200 status.
    NotFound { status: u16 },
}

/// Thin client over the complaint API.
///
/// Transport failures (connection refused, timeouts) surface as
/// [`ToolError::Http`]; HTTP-level answers come back as outcomes.
#[derive(Debug, Clone)]
pub struct ComplaintClient {
    client: Client,
    base_url: Url,
}

impl ComplaintClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ToolError> {
        let base_url = Url::parse(base_url).map_err(|e| ToolError::InvalidParameter {
            name: "base_url".to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ToolError::InvalidParameter {
                name: "base_url".to_string(),
                reason: format!("{} cannot be used as a base URL", base_url),
            });
        }

        let client = Client::builder()
            .build()
            .map_err(|e| ToolError::ExecutionFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `POST /complaints`.
    pub async fn create(&self, request: &NewComplaintRequest) -> Result<CreateOutcome, ToolError> {
        let url = self.endpoint(&["complaints"]);
        debug!("Creating complaint via {}", url);

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            let receipt: ComplaintReceipt = response.json().await?;
            return Ok(CreateOutcome::Created(receipt));
        }

        let detail = response.text().await.unwrap_or_default();
        warn!("Complaint API rejected create ({}): {}", status.as_u16(), detail);
        Ok(CreateOutcome::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    /// `GET /complaints/{complaint_id}`.
    pub async fn get(&self, complaint_id: &str) -> Result<GetOutcome, ToolError> {
        let url = self.endpoint(&["complaints", complaint_id]);
        debug!("Fetching complaint via {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            let record: ComplaintRecord = response.json().await?;
            return Ok(GetOutcome::Found(record));
        }

        debug!("Complaint lookup returned {}", status.as_u16());
        Ok(GetOutcome::NotFound {
            status: status.as_u16(),
        })
    }
}
