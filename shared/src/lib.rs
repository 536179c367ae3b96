//! Shared types for the campaign analytics service
//!
//! Domain models (records, keys, report shapes) and the unified error
//! system used by the server crate and its clients.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
