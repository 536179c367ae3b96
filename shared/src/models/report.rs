//! Aggregated report shapes

use serde::{Deserialize, Serialize};

/// Filtered records together with the sum of their amounts.
///
/// `detail` keeps the order the records had in their source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult<T> {
    pub total: f64,
    pub detail: Vec<T>,
}

impl<T> AggregateResult<T> {
    pub fn empty() -> Self {
        Self {
            total: 0.0,
            detail: Vec::new(),
        }
    }
}
