//! Record store
//!
//! Read-only keyed tables of report records, built once at startup, and the
//! mutable [`WidgetStore`] holding dashboard configuration.
//!
//! A key missing from a table is a [`StoreError`]. A key present with an
//! empty list is a successful lookup of zero records.

mod seed;
pub mod widgets;

use std::collections::HashMap;
use std::hash::Hash;

use shared::error::{AppError, ErrorCode};
use shared::models::{
    CampaignId, CampaignSummary, ChartPoint, CostKind, CouponRecord, ExpenseRecord,
    InvestmentRecord, LocalityInvestment, LocalityKey, LocationInvestment, MapPoint,
    ProductInvestment, SaleRecord,
};
use thiserror::Error;

pub use seed::{CHART_TYPES, DATA_SOURCES};
pub use widgets::{DEFAULT_USER, DEFAULT_WIDGETS, WidgetStore};

/// Store lookup errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Campaign {0} not found")]
    Campaign(CampaignId),

    #[error("No {table} data found for campaign {id}")]
    CampaignTable { table: &'static str, id: CampaignId },

    #[error("No investment data found for locality {0}")]
    Locality(LocalityKey),

    #[error("No expense data found for cost kind {0}")]
    CostKind(CostKind),

    #[error("No data for metric {metric} in campaign {id}")]
    Metric { id: CampaignId, metric: String },

    #[error("No widget configuration for user {0}")]
    WidgetsUnset(String),

    #[error("Widget list must not be empty")]
    EmptyWidgetList,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::Campaign(id) | StoreError::CampaignTable { id, .. } => {
                AppError::with_message(ErrorCode::CampaignNotFound, message)
                    .with_detail("campaign_id", id)
            }
            StoreError::Locality(key) => {
                AppError::with_message(ErrorCode::LocalityNotFound, message)
                    .with_detail("locality", key.as_str())
            }
            StoreError::CostKind(key) => {
                AppError::with_message(ErrorCode::CostKindNotFound, message)
                    .with_detail("cost", key.as_str())
            }
            StoreError::Metric { id, metric } => {
                AppError::with_message(ErrorCode::MetricNotFound, message)
                    .with_detail("campaign_id", id)
                    .with_detail("metric", metric)
            }
            StoreError::WidgetsUnset(_) => {
                AppError::with_message(ErrorCode::WidgetsNotConfigured, message)
            }
            StoreError::EmptyWidgetList => {
                AppError::with_message(ErrorCode::WidgetListEmpty, message)
                    .with_detail("field", "widgets")
            }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

fn lookup<'a, K, V>(
    table: &'a HashMap<K, Vec<V>>,
    key: &K,
    miss: impl FnOnce() -> StoreError,
) -> StoreResult<&'a [V]>
where
    K: Eq + Hash,
{
    table.get(key).map(Vec::as_slice).ok_or_else(miss)
}

/// Immutable report tables
#[derive(Debug, Default)]
pub struct RecordStore {
    campaigns: Vec<CampaignSummary>,
    expenses: HashMap<CampaignId, Vec<ExpenseRecord>>,
    expense_evolution: HashMap<CostKind, Vec<ExpenseRecord>>,
    locality_investment: HashMap<LocalityKey, Vec<InvestmentRecord>>,
    location_investment: HashMap<CampaignId, Vec<LocationInvestment>>,
    investment_map: HashMap<CampaignId, Vec<MapPoint>>,
    chart_metrics: HashMap<CampaignId, HashMap<String, Vec<ChartPoint>>>,
    locality_breakdown: HashMap<CampaignId, Vec<LocalityInvestment>>,
    product_investment: HashMap<CampaignId, Vec<ProductInvestment>>,
    sales: HashMap<CampaignId, Vec<SaleRecord>>,
    coupons: HashMap<CampaignId, Vec<CouponRecord>>,
    alerts: HashMap<CampaignId, Vec<String>>,
}

impl RecordStore {
    /// Store populated with the built-in demo dataset
    pub fn seeded() -> Self {
        let store = seed::build();
        tracing::debug!(
            campaigns = store.campaigns.len(),
            localities = store.locality_investment.len(),
            cost_kinds = store.expense_evolution.len(),
            "Record store seeded"
        );
        store
    }

    /// Campaign summaries in table order
    pub fn campaigns(&self) -> &[CampaignSummary] {
        &self.campaigns
    }

    pub fn campaign(&self, id: CampaignId) -> StoreResult<&CampaignSummary> {
        self.campaigns
            .iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::Campaign(id))
    }

    pub fn expenses(&self, id: CampaignId) -> StoreResult<&[ExpenseRecord]> {
        lookup(&self.expenses, &id, || StoreError::CampaignTable {
            table: "expense",
            id,
        })
    }

    pub fn expense_evolution(&self, cost: &CostKind) -> StoreResult<&[ExpenseRecord]> {
        lookup(&self.expense_evolution, cost, || {
            StoreError::CostKind(cost.clone())
        })
    }

    pub fn locality_investment(&self, locality: &LocalityKey) -> StoreResult<&[InvestmentRecord]> {
        lookup(&self.locality_investment, locality, || {
            StoreError::Locality(locality.clone())
        })
    }

    pub fn location_investment(&self, id: CampaignId) -> StoreResult<&[LocationInvestment]> {
        lookup(&self.location_investment, &id, || StoreError::CampaignTable {
            table: "location",
            id,
        })
    }

    pub fn investment_map(&self, id: CampaignId) -> StoreResult<&[MapPoint]> {
        lookup(&self.investment_map, &id, || StoreError::CampaignTable {
            table: "map",
            id,
        })
    }

    /// Chart series for one metric of a campaign.
    ///
    /// Metric names are matched exactly. An unknown campaign and an unknown
    /// metric both report [`StoreError::Metric`].
    pub fn chart_series(&self, id: CampaignId, metric: &str) -> StoreResult<&[ChartPoint]> {
        self.chart_metrics
            .get(&id)
            .and_then(|series| series.get(metric))
            .map(Vec::as_slice)
            .ok_or_else(|| StoreError::Metric {
                id,
                metric: metric.to_string(),
            })
    }

    pub fn locality_breakdown(&self, id: CampaignId) -> StoreResult<&[LocalityInvestment]> {
        lookup(&self.locality_breakdown, &id, || StoreError::CampaignTable {
            table: "locality investment",
            id,
        })
    }

    pub fn product_investment(&self, id: CampaignId) -> StoreResult<&[ProductInvestment]> {
        lookup(&self.product_investment, &id, || StoreError::CampaignTable {
            table: "product investment",
            id,
        })
    }

    pub fn sales(&self, id: CampaignId) -> StoreResult<&[SaleRecord]> {
        lookup(&self.sales, &id, || StoreError::CampaignTable {
            table: "sales",
            id,
        })
    }

    pub fn coupons(&self, id: CampaignId) -> StoreResult<&[CouponRecord]> {
        lookup(&self.coupons, &id, || StoreError::CampaignTable {
            table: "coupon",
            id,
        })
    }

    pub fn alerts(&self, id: CampaignId) -> StoreResult<&[String]> {
        lookup(&self.alerts, &id, || StoreError::CampaignTable {
            table: "alert",
            id,
        })
    }
}
