//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, key, value)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// True for 5xx errors whose message must not reach the client
    pub fn is_system(&self) -> bool {
        self.http_status().is_server_error()
    }

    // ==================== Convenience constructors ====================

    /// Create a missing required field error
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create an invalid format error for a named field
    pub fn invalid_format(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg).with_detail("field", field.into())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Unified API response structure
///
/// Used for error bodies and for plain acknowledgements:
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// Create a success acknowledgement carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            message: message.into(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    ///
    /// System errors are reduced to the code's generic message.
    pub fn error(err: &AppError) -> Self {
        if err.is_system() {
            return Self {
                code: Some(err.code.code()),
                message: err.code.message().to_string(),
                data: None,
                details: None,
            };
        }

        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        let category = self.code.category().name();
        if self.is_system() {
            tracing::error!(
                code = %self.code,
                category,
                message = %self.message,
                "System error occurred"
            );
        } else {
            tracing::debug!(
                code = %self.code,
                category,
                message = %self.message,
                "Request rejected"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code {
            Some(0) | None => StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::CampaignNotFound);
        assert_eq!(err.code, ErrorCode::CampaignNotFound);
        assert_eq!(err.message, "Campaign not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid date")
            .with_detail("field", "from")
            .with_detail("value", "2025-13-01");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "from");
        assert_eq!(details.get("value").unwrap(), "2025-13-01");
    }

    #[test]
    fn test_convenience_constructors() {
        let err = AppError::required_field("campaign_id");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "campaign_id is required");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err = AppError::not_found("Campaign 9");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Campaign 9 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::internal("boom");
        assert!(err.is_system());
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_hides_system_details() {
        let err = AppError::internal("serializer exploded at byte 12").with_detail("byte", 12);
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(9001));
        assert_eq!(response.message, "Internal server error");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_keeps_client_details() {
        let err = AppError::with_message(ErrorCode::MetricNotFound, "No data for metric ctr")
            .with_detail("metric", "ctr");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(1004));
        assert_eq!(response.message, "No data for metric ctr");
        assert!(response.details.unwrap().contains_key("metric"));
    }

    #[test]
    fn test_into_response_status_by_category() {
        use crate::error::ErrorCategory;
        use axum::response::IntoResponse;

        let err = AppError::internal("handler panicked");
        assert_eq!(err.code.category(), ErrorCategory::System);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = AppError::new(ErrorCode::WidgetListEmpty);
        assert_eq!(err.code.category(), ErrorCategory::Dashboard);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_response_serialize() {
        let response = ApiResponse::message("Widgets saved");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"code":0,"message":"Widgets saved"}"#);
    }
}
