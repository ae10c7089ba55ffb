//! Complaint routes.

use axum::extract::{Path, State};
use axum::Json;
use database::validation::validate_new_complaint;
use database::{complaint, Complaint, ComplaintReceipt, NewComplaint};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Create a new complaint.
///
/// The body is validated before anything touches the database. Storage
/// failures are logged and reported as a generic 500.
pub async fn create_complaint(
    State(state): State<AppState>,
    Json(req): Json<NewComplaint>,
) -> Result<Json<ComplaintReceipt>> {
    validate_new_complaint(&req).map_err(ApiError::Validation)?;

    let receipt = complaint::create_complaint(state.db.pool(), &req)
        .await
        .map_err(ApiError::CreateFailed)?;

    Ok(Json(receipt))
}

/// Get a complaint by id.
pub async fn get_complaint(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
) -> Result<Json<Complaint>> {
    debug!(complaint_id = %complaint_id, "Looking up complaint");

    complaint::get_complaint(state.db.pool(), &complaint_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}
