//! Unified error codes for the campaign analytics service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Report errors (campaigns, localities, cost kinds, metrics)
//! - 2xxx: Dashboard errors (widget configuration)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// a stable number instead of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Start of a date range is after its end
    InvalidDateRange = 8,

    // ==================== 1xxx: Report ====================
    /// Campaign not found
    CampaignNotFound = 1001,
    /// Locality not found
    LocalityNotFound = 1002,
    /// Cost kind not found
    CostKindNotFound = 1003,
    /// Metric not available for the campaign
    MetricNotFound = 1004,

    // ==================== 2xxx: Dashboard ====================
    /// No widget configuration stored for the user
    WidgetsNotConfigured = 2001,
    /// Widget list must not be empty
    WidgetListEmpty = 2002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Export payload could not be produced
    ExportFailed = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::InvalidDateRange => "Start date must not be after end date",

            // Report
            ErrorCode::CampaignNotFound => "Campaign not found",
            ErrorCode::LocalityNotFound => "Locality not found",
            ErrorCode::CostKindNotFound => "Cost kind not found",
            ErrorCode::MetricNotFound => "Metric not found",

            // Dashboard
            ErrorCode::WidgetsNotConfigured => "No widget configuration for the user",
            ErrorCode::WidgetListEmpty => "Widget list must not be empty",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ExportFailed => "Export failed",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::InvalidDateRange),

            // Report
            1001 => Ok(ErrorCode::CampaignNotFound),
            1002 => Ok(ErrorCode::LocalityNotFound),
            1003 => Ok(ErrorCode::CostKindNotFound),
            1004 => Ok(ErrorCode::MetricNotFound),

            // Dashboard
            2001 => Ok(ErrorCode::WidgetsNotConfigured),
            2002 => Ok(ErrorCode::WidgetListEmpty),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ExportFailed),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::InvalidDateRange.code(), 8);

        assert_eq!(ErrorCode::CampaignNotFound.code(), 1001);
        assert_eq!(ErrorCode::LocalityNotFound.code(), 1002);
        assert_eq!(ErrorCode::CostKindNotFound.code(), 1003);
        assert_eq!(ErrorCode::MetricNotFound.code(), 1004);

        assert_eq!(ErrorCode::WidgetsNotConfigured.code(), 2001);
        assert_eq!(ErrorCode::WidgetListEmpty.code(), 2002);

        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::ExportFailed.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1004), Ok(ErrorCode::MetricNotFound));
        assert_eq!(ErrorCode::try_from(2002), Ok(ErrorCode::WidgetListEmpty));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CampaignNotFound).unwrap();
        assert_eq!(json, "1001");

        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::WidgetsNotConfigured);

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "3");
        assert_eq!(ErrorCode::MetricNotFound.to_string(), "1004");
        assert_eq!(
            InvalidErrorCode(999).to_string(),
            "invalid error code: 999"
        );
    }
}
