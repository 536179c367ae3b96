//! Date-range filtering and summation over dated records
//!
//! Pure functions shared by every time-series report. Bounds are inclusive
//! on both ends; an absent bound is open.

use chrono::NaiveDate;
use shared::models::{AggregateResult, DatedRecord};

/// Keep the records whose date lies within `[from, to]`, in their original
/// order. An inverted range yields nothing.
pub fn filter_by_date_range<T>(
    records: &[T],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<T>
where
    T: DatedRecord + Clone,
{
    records
        .iter()
        .filter(|r| in_range(r.date(), from, to))
        .cloned()
        .collect()
}

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.is_none_or(|f| date >= f) && to.is_none_or(|t| date <= t)
}

/// Arithmetic sum of the amounts; `0.0` for an empty slice
pub fn sum<T: DatedRecord>(records: &[T]) -> f64 {
    records.iter().fold(0.0, |acc, r| acc + r.amount())
}

/// Filter then total
pub fn summarize<T>(
    records: &[T],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> AggregateResult<T>
where
    T: DatedRecord + Clone,
{
    let detail = filter_by_date_range(records, from, to);
    AggregateResult {
        total: sum(&detail),
        detail,
    }
}
