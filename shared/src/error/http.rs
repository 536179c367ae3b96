//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CampaignNotFound
            | Self::LocalityNotFound
            | Self::CostKindNotFound
            | Self::MetricNotFound
            | Self::WidgetsNotConfigured => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::ExportFailed | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::InvalidDateRange
            | Self::WidgetListEmpty => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::CampaignNotFound,
            ErrorCode::LocalityNotFound,
            ErrorCode::CostKindNotFound,
            ErrorCode::MetricNotFound,
            ErrorCode::WidgetsNotConfigured,
        ] {
            assert_eq!(code.http_status(), StatusCode::NOT_FOUND, "{code:?}");
        }
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidDateRange.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::WidgetListEmpty.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ExportFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
