//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub complaints: i64,
}

/// Health check endpoint. Touches the database so a broken store shows up.
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>> {
    let complaints = database::complaint::count_complaints(state.db.pool()).await?;
    Ok(Json(Health {
        status: "ok".to_string(),
        complaints,
    }))
}
