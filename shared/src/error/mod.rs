//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope for errors and acknowledgements
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Report errors
//! - 2xxx: Dashboard errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::CampaignNotFound);
//!
//! let err = AppError::with_message(ErrorCode::InvalidFormat, "from must be YYYY-MM-DD")
//!     .with_detail("field", "from");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(6));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
