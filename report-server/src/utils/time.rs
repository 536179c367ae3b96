//! Date parsing and range validation

use chrono::NaiveDate;

use super::{AppError, AppResult};
use shared::error::ErrorCode;

/// Wire format of every date parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date parameter
pub fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::invalid_format(
            field,
            format!("Invalid date format for {field}: {value} (expected YYYY-MM-DD)"),
        )
        .with_detail("value", value)
    })
}

/// Parse an optional date parameter; absent stays absent
pub fn parse_optional_date(field: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    value.map(|v| parse_date(field, v)).transpose()
}

/// Validated inclusive date range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Range with no bounds
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a range, rejecting `from > to`
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(f), Some(t)) = (from, to)
            && f > t
        {
            return Err(AppError::with_message(
                ErrorCode::InvalidDateRange,
                format!("from ({f}) must not be after to ({t})"),
            )
            .with_detail("from", f.to_string())
            .with_detail("to", t.to_string()));
        }
        Ok(Self { from, to })
    }

    /// Parse raw `from` / `to` query values
    pub fn parse(from: Option<&str>, to: Option<&str>) -> AppResult<Self> {
        Self::new(
            parse_optional_date("from", from)?,
            parse_optional_date("to", to)?,
        )
    }
}
