//! Health check and service banner
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | / | GET | Service banner |
//! | /health | GET | Health check |
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "uptime_seconds": 42
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::ApiResponse;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    uptime_seconds: u64,
}

async fn banner() -> ApiResponse<()> {
    ApiResponse::message("Campaign analytics API is running")
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_seconds: state.uptime_seconds(),
    })
}
