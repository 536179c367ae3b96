//! Utility module
//!
//! - [`AppError`] / [`ApiResponse`]: unified error types (from `shared::error`)
//! - Logging, date parsing, parameter validation, query flags and request extractors

pub mod extract;
pub mod logger;
pub mod serde_helpers;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
