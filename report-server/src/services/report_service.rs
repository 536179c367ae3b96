//! Report Service - expense and investment queries
//!
//! Every query runs the same pipeline: validate the raw parameters, resolve
//! the entity key in the [`RecordStore`], filter and aggregate, then shape the
//! response. Reads have no side effects.

use std::sync::Arc;

use serde::Deserialize;
use shared::error::ErrorCode;
use shared::models::{
    AggregateResult, ChartPoint, CostKind, ExpenseRecord, InvestmentRecord, LocationInvestment,
    MapPoint, ProductInvestment,
};

use super::aggregate::{filter_by_date_range, summarize};
use crate::store::RecordStore;
use crate::utils::serde_helpers;
use crate::utils::time::{DateRange, parse_optional_date};
use crate::utils::validation::{campaign_id, cost_kind, locality_key, require};
use crate::utils::{AppError, AppResult};

// =============================================================================
// Query Parameters
// =============================================================================

/// `?campaign_id&from&to`
#[derive(Debug, Default, Deserialize)]
pub struct CampaignRangeQuery {
    pub campaign_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `?campaign_id`
#[derive(Debug, Default, Deserialize)]
pub struct CampaignQuery {
    pub campaign_id: Option<String>,
}

/// `?cost&from`
#[derive(Debug, Default, Deserialize)]
pub struct EvolutionQuery {
    pub cost: Option<String>,
    pub from: Option<String>,
}

/// `?cost&from&download`
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub cost: Option<String>,
    pub from: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub download: bool,
}

/// `?locality&from&to`
#[derive(Debug, Default, Deserialize)]
pub struct LocalityQuery {
    pub locality: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `?campaign_id&metric`
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub campaign_id: Option<String>,
    pub metric: Option<String>,
}

/// Rendered download for the expense export
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    /// Pretty-printed JSON array
    pub body: Vec<u8>,
}

// =============================================================================
// Service
// =============================================================================

#[derive(Debug, Clone)]
pub struct ReportService {
    store: Arc<RecordStore>,
}

impl ReportService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Campaign spend within a date range, with total
    pub fn campaign_expenses(
        &self,
        query: &CampaignRangeQuery,
    ) -> AppResult<AggregateResult<ExpenseRecord>> {
        let id = campaign_id(query.campaign_id.as_deref())?;
        let range = DateRange::parse(query.from.as_deref(), query.to.as_deref())?;
        let records = self.store.expenses(id)?;
        Ok(summarize(records, range.from, range.to))
    }

    /// Spend series of a cost kind starting at `from`
    pub fn expense_evolution(&self, query: &EvolutionQuery) -> AppResult<Vec<ExpenseRecord>> {
        let cost = cost_kind(query.cost.as_deref())?;
        let from = parse_optional_date("from", query.from.as_deref())?;
        self.evolution_series(&cost, from)
    }

    /// Same series as [`Self::expense_evolution`], keyed by the export query
    pub fn expense_export(
        &self,
        query: &ExportQuery,
    ) -> AppResult<(CostKind, Vec<ExpenseRecord>)> {
        let cost = cost_kind(query.cost.as_deref())?;
        let from = parse_optional_date("from", query.from.as_deref())?;
        let series = self.evolution_series(&cost, from)?;
        Ok((cost, series))
    }

    /// Render an export series as a downloadable JSON file
    pub fn render_export(
        &self,
        cost: &CostKind,
        series: &[ExpenseRecord],
    ) -> AppResult<ExportFile> {
        let body = serde_json::to_vec_pretty(series).map_err(|e| {
            tracing::error!(cost = %cost, error = %e, "Failed to serialize expense export");
            AppError::new(ErrorCode::ExportFailed)
        })?;
        Ok(ExportFile {
            filename: format!("export_{}.json", cost),
            body,
        })
    }

    fn evolution_series(
        &self,
        cost: &CostKind,
        from: Option<chrono::NaiveDate>,
    ) -> AppResult<Vec<ExpenseRecord>> {
        let records = self.store.expense_evolution(cost)?;
        Ok(filter_by_date_range(records, from, None))
    }

    /// Investment in a locality within a date range, with total
    pub fn locality_investment(
        &self,
        query: &LocalityQuery,
    ) -> AppResult<AggregateResult<InvestmentRecord>> {
        let locality = locality_key(query.locality.as_deref())?;
        let range = DateRange::parse(query.from.as_deref(), query.to.as_deref())?;
        let records = self.store.locality_investment(&locality)?;
        Ok(summarize(records, range.from, range.to))
    }

    /// Investment per city for a campaign.
    ///
    /// The date range is validated but not applied: location rows are
    /// campaign totals and carry no date.
    pub fn location_investment(
        &self,
        query: &CampaignRangeQuery,
    ) -> AppResult<Vec<LocationInvestment>> {
        let id = campaign_id(query.campaign_id.as_deref())?;
        DateRange::parse(query.from.as_deref(), query.to.as_deref())?;
        Ok(self.store.location_investment(id)?.to_vec())
    }

    pub fn investment_map(&self, query: &CampaignQuery) -> AppResult<Vec<MapPoint>> {
        let id = campaign_id(query.campaign_id.as_deref())?;
        Ok(self.store.investment_map(id)?.to_vec())
    }

    /// Series of one metric (`revenue`, `clicks`, `roi`) for a campaign
    pub fn investment_chart(&self, query: &ChartQuery) -> AppResult<Vec<ChartPoint>> {
        let id = campaign_id(query.campaign_id.as_deref())?;
        let metric = require("metric", query.metric.as_deref())?;
        Ok(self.store.chart_series(id, metric)?.to_vec())
    }

    pub fn product_investment(&self, query: &CampaignQuery) -> AppResult<Vec<ProductInvestment>> {
        let id = campaign_id(query.campaign_id.as_deref())?;
        Ok(self.store.product_investment(id)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ReportService {
        ReportService::new(Arc::new(RecordStore::seeded()))
    }

    fn range(campaign: &str, from: Option<&str>, to: Option<&str>) -> CampaignRangeQuery {
        CampaignRangeQuery {
            campaign_id: Some(campaign.to_string()),
            from: from.map(String::from),
            to: to.map(String::from),
        }
    }

    #[test]
    fn test_campaign_expenses_in_range() {
        let result = service()
            .campaign_expenses(&range("1", Some("2025-06-02"), Some("2025-06-03")))
            .unwrap();
        assert_eq!(result.total, 4500.0);
        assert_eq!(result.detail.len(), 2);
        assert_eq!(result.detail[0].amount, 2000.0);
    }

    #[test]
    fn test_campaign_expenses_without_range() {
        let result = service().campaign_expenses(&range("1", None, None)).unwrap();
        assert_eq!(result.total, 6000.0);
        assert_eq!(result.detail.len(), 3);
    }

    #[test]
    fn test_campaign_expenses_nothing_in_range() {
        let result = service()
            .campaign_expenses(&range("1", Some("2026-01-01"), None))
            .unwrap();
        assert_eq!(result.total, 0.0);
        assert!(result.detail.is_empty());
    }

    #[test]
    fn test_campaign_expenses_errors() {
        let svc = service();
        let err = svc.campaign_expenses(&range("9", None, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CampaignNotFound);

        let err = svc
            .campaign_expenses(&range("1", Some("2025-6-2x"), None))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        let err = svc
            .campaign_expenses(&range("1", Some("2025-06-03"), Some("2025-06-01")))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);

        let err = svc
            .campaign_expenses(&CampaignRangeQuery::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_validation_runs_before_lookup() {
        // Unknown campaign with a malformed date reports the date
        let err = service()
            .campaign_expenses(&range("9", Some("bad"), None))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_expense_evolution() {
        let svc = service();
        let series = svc
            .expense_evolution(&EvolutionQuery {
                cost: Some("Advertising".into()),
                from: Some("2025-02-01".into()),
            })
            .unwrap();
        let amounts: Vec<f64> = series.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![620.0, 580.0]);

        let err = svc
            .expense_evolution(&EvolutionQuery {
                cost: Some("travel".into()),
                from: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CostKindNotFound);

        let err = svc
            .expense_evolution(&EvolutionQuery {
                cost: Some("  ".into()),
                from: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_export_matches_evolution() {
        let svc = service();
        let (cost, series) = svc
            .expense_export(&ExportQuery {
                cost: Some("production".into()),
                from: None,
                download: true,
            })
            .unwrap();
        let evolution = svc
            .expense_evolution(&EvolutionQuery {
                cost: Some("production".into()),
                from: None,
            })
            .unwrap();
        assert_eq!(series, evolution);

        let file = svc.render_export(&cost, &series).unwrap();
        assert_eq!(file.filename, "export_production.json");
        let text = String::from_utf8(file.body).unwrap();
        assert!(text.starts_with("[\n  {"));
        let parsed: Vec<ExpenseRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, series);
    }

    #[test]
    fn test_locality_investment() {
        let svc = service();
        let result = svc
            .locality_investment(&LocalityQuery {
                locality: Some("SANTIAGO".into()),
                from: Some("2025-06-02".into()),
                to: None,
            })
            .unwrap();
        assert_eq!(result.total, 4000.0);
        assert_eq!(result.detail.len(), 2);

        let err = svc
            .locality_investment(&LocalityQuery {
                locality: Some("lima".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LocalityNotFound);
    }

    #[test]
    fn test_location_investment_ignores_range() {
        let svc = service();
        let rows = svc
            .location_investment(&range("1", Some("2030-01-01"), Some("2030-01-02")))
            .unwrap();
        assert_eq!(rows.len(), 2);

        let err = svc
            .location_investment(&range("1", Some("2030-01-02"), Some("2030-01-01")))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);
    }

    #[test]
    fn test_investment_chart() {
        let svc = service();
        let query = |metric: &str| ChartQuery {
            campaign_id: Some("1".into()),
            metric: Some(metric.into()),
        };

        let points = svc.investment_chart(&query("revenue")).unwrap();
        assert_eq!(points[1].value, 1350.0);

        let err = svc.investment_chart(&query("ctr")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MetricNotFound);

        let err = svc
            .investment_chart(&ChartQuery {
                campaign_id: Some("1".into()),
                metric: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_campaign_scoped_lists() {
        let svc = service();
        let q = |id: &str| CampaignQuery {
            campaign_id: Some(id.into()),
        };
        assert_eq!(svc.investment_map(&q("1")).unwrap().len(), 2);
        assert_eq!(svc.product_investment(&q("1")).unwrap().len(), 2);
        assert_eq!(
            svc.investment_map(&q("2")).unwrap_err().code,
            ErrorCode::CampaignNotFound
        );
    }
}
