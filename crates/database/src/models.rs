//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored customer complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Complaint {
    /// Short uppercase identifier (e.g., "3F9A1C2B").
    pub complaint_id: String,
    /// Customer name.
    pub name: String,
    /// 10-digit phone number starting with 6-9.
    pub phone_number: String,
    /// Customer email address.
    pub email: String,
    /// Free-text description of the issue.
    pub complaint_details: String,
    /// Insertion timestamp (ISO-8601, local time).
    pub created_at: String,
}

/// Input for creating a complaint, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub complaint_details: String,
}

impl NewComplaint {
    /// Create a new complaint input.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        complaint_details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            complaint_details: complaint_details.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            complaint_details: self.complaint_details.trim().to_string(),
        }
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintReceipt {
    /// Identifier assigned to the new complaint.
    pub complaint_id: String,
    /// Confirmation message.
    pub message: String,
}
