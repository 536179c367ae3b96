//! Time-series records (expenses, investment, sales) and coupons

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record that sits on a calendar date and carries a numeric amount.
///
/// Implemented by every time-series record kind so date-range filtering and
/// summation can be written once.
pub trait DatedRecord {
    fn date(&self) -> NaiveDate;
    fn amount(&self) -> f64;
}

/// Campaign spend on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    /// Not validated: negative amounts are stored and summed as-is
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            description: None,
        }
    }

    pub fn described(date: NaiveDate, amount: f64, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: Some(description.into()),
        }
    }
}

impl DatedRecord for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Investment made in a locality on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub date: NaiveDate,
    pub amount: f64,
}

impl DatedRecord for InvestmentRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Sale attributed to a campaign through a sales channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    /// Sales channel (online, store, ...)
    pub channel: String,
    pub amount: f64,
}

impl DatedRecord for SaleRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Discount coupon issued for a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponRecord {
    pub code: String,
    /// Discount percentage
    pub discount: f64,
    pub valid_until: NaiveDate,
}
