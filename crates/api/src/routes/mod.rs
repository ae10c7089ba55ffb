//! Route handlers for the complaint API.

pub mod complaints;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/complaints", post(complaints::create_complaint))
        .route("/complaints/:complaint_id", get(complaints::get_complaint))
}
