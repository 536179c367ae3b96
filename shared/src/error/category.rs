//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Report errors
/// - 2xxx: Dashboard errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Report errors (1xxx)
    Report,
    /// Dashboard errors (2xxx)
    Dashboard,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Report,
            2000..3000 => Self::Dashboard,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Report => "report",
            Self::Dashboard => "dashboard",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Report);
        assert_eq!(ErrorCategory::from_code(2002), ErrorCategory::Dashboard);
        assert_eq!(ErrorCategory::from_code(3000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::MetricNotFound.category(), ErrorCategory::Report);
        assert_eq!(
            ErrorCode::WidgetListEmpty.category(),
            ErrorCategory::Dashboard
        );
        assert_eq!(ErrorCode::ExportFailed.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Dashboard).unwrap();
        assert_eq!(json, "\"dashboard\"");

        let category: ErrorCategory = serde_json::from_str("\"report\"").unwrap();
        assert_eq!(category, ErrorCategory::Report);
        assert_eq!(category.name(), "report");
    }
}
