//! Campaign Service - per-campaign lists, sales and summaries

use std::sync::Arc;

use serde::Deserialize;
use shared::models::{
    AggregateResult, CampaignId, CampaignSummary, CouponRecord, ExportDescriptor,
    LocalityInvestment, SaleRecord,
};

use super::aggregate::summarize;
use crate::store::RecordStore;
use crate::utils::AppResult;
use crate::utils::time::DateRange;

/// `?city&status` (both optional, case-insensitive equality)
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    pub city: Option<String>,
    pub status: Option<String>,
}

/// `?from&to`
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CampaignService {
    store: Arc<RecordStore>,
}

impl CampaignService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Campaign summaries matching the optional filters, in table order.
    ///
    /// Blank filter values are ignored.
    pub fn summaries(&self, query: &SummaryQuery) -> Vec<CampaignSummary> {
        let city = query.city.as_deref().filter(|c| !c.trim().is_empty());
        let status = query.status.as_deref().filter(|s| !s.trim().is_empty());

        self.store
            .campaigns()
            .iter()
            .filter(|c| city.is_none_or(|city| c.in_city(city)))
            .filter(|c| status.is_none_or(|status| c.has_status(status)))
            .cloned()
            .collect()
    }

    pub fn alerts(&self, id: CampaignId) -> AppResult<Vec<String>> {
        Ok(self.store.alerts(id)?.to_vec())
    }

    pub fn coupons(&self, id: CampaignId) -> AppResult<Vec<CouponRecord>> {
        Ok(self.store.coupons(id)?.to_vec())
    }

    /// Campaign sales within a date range, with total
    pub fn sales(
        &self,
        id: CampaignId,
        query: &RangeQuery,
    ) -> AppResult<AggregateResult<SaleRecord>> {
        let range = DateRange::parse(query.from.as_deref(), query.to.as_deref())?;
        let records = self.store.sales(id)?;
        Ok(summarize(records, range.from, range.to))
    }

    /// Campaign investment split by locality
    pub fn localities(&self, id: CampaignId) -> AppResult<Vec<LocalityInvestment>> {
        Ok(self.store.locality_breakdown(id)?.to_vec())
    }

    /// Name of the export file for a known campaign
    pub fn export(&self, id: CampaignId) -> AppResult<ExportDescriptor> {
        let campaign = self.store.campaign(id)?;
        tracing::info!(campaign_id = id, name = %campaign.name, "Campaign export requested");
        Ok(ExportDescriptor::for_campaign(campaign.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn service() -> CampaignService {
        CampaignService::new(Arc::new(RecordStore::seeded()))
    }

    fn summary(city: Option<&str>, status: Option<&str>) -> SummaryQuery {
        SummaryQuery {
            city: city.map(String::from),
            status: status.map(String::from),
        }
    }

    fn ids(rows: &[CampaignSummary]) -> Vec<CampaignId> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_summaries_filters() {
        let svc = service();
        assert_eq!(ids(&svc.summaries(&summary(None, None))), vec![1, 2, 3]);
        assert_eq!(ids(&svc.summaries(&summary(Some("santiago"), None))), vec![1, 3]);
        assert_eq!(ids(&svc.summaries(&summary(None, Some("FINISHED")))), vec![2]);
        assert_eq!(
            ids(&svc.summaries(&summary(Some("Santiago"), Some("active")))),
            vec![1, 3]
        );
        assert!(svc.summaries(&summary(Some("Lima"), None)).is_empty());
        assert!(svc.summaries(&summary(None, Some("paused"))).is_empty());
        assert_eq!(svc.summaries(&summary(Some(""), Some(" "))).len(), 3);
    }

    #[test]
    fn test_alerts_and_coupons() {
        let svc = service();
        assert_eq!(svc.alerts(1).unwrap().len(), 2);
        assert!(svc.alerts(2).unwrap().is_empty());
        assert_eq!(svc.alerts(42).unwrap_err().code, ErrorCode::CampaignNotFound);

        assert_eq!(svc.coupons(1).unwrap()[0].code, "DISCOUNT10");
        assert!(svc.coupons(3).unwrap().is_empty());
    }

    #[test]
    fn test_sales() {
        let svc = service();
        let result = svc.sales(1, &RangeQuery::default()).unwrap();
        assert_eq!(result.total, 35000.0);
        assert_eq!(result.detail.len(), 2);

        let result = svc
            .sales(
                1,
                &RangeQuery {
                    from: Some("2025-06-02".into()),
                    to: None,
                },
            )
            .unwrap();
        assert_eq!(result.total, 20000.0);
        assert_eq!(result.detail[0].channel, "store");

        let result = svc.sales(2, &RangeQuery::default()).unwrap();
        assert_eq!(result.total, 0.0);
        assert!(result.detail.is_empty());
    }

    #[test]
    fn test_export_descriptor() {
        let svc = service();
        assert_eq!(svc.export(2).unwrap().file, "campaign_2_data.csv");
        assert_eq!(svc.export(9).unwrap_err().code, ErrorCode::CampaignNotFound);
    }

    #[test]
    fn test_localities() {
        let svc = service();
        let rows = svc.localities(1).unwrap();
        assert_eq!(rows[0].locality, "Santiago");
        assert!(svc.localities(3).is_err());
    }
}
