//! Error types for the complaint API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::FieldViolation;
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation.
    #[error("validation failed ({} violations)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// No complaint with the requested id.
    #[error("Complaint not found")]
    NotFound,

    /// Storage failure while creating a complaint.
    #[error("Failed to create complaint: {0}")]
    CreateFailed(database::DatabaseError),

    /// Storage failure while reading.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(violations) => {
                tracing::warn!(count = violations.len(), "Rejected invalid complaint");
                let body = serde_json::json!({ "detail": violations });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::NotFound => {
                let body = serde_json::json!({ "detail": "Complaint not found" });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::CreateFailed(err) => {
                tracing::error!("Failed to create complaint: {}", err);
                let body = serde_json::json!({ "detail": "Failed to create complaint" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                let body = serde_json::json!({ "detail": "Internal server error" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
