//! HTTP API for filing and retrieving customer complaints.
//!
//! Routes:
//!
//! - `POST /complaints` validates the body and stores a new complaint.
//! - `GET /complaints/:complaint_id` returns a stored complaint or 404.
//! - `GET /health` liveness probe.
//!
//! The binary `complaint-api` wires [`Config`], the database and [`router`]
//! together; tests build the router directly against an in-memory database.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
