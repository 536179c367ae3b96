//! Campaigns API Handlers

use axum::{Json, extract::State};
use shared::models::{
    AggregateResult, CampaignId, CampaignSummary, CouponRecord, ExportDescriptor,
    LocalityInvestment, SaleRecord,
};

use crate::core::ServerState;
use crate::services::campaign_service::{RangeQuery, SummaryQuery};
use crate::utils::AppResult;
use crate::utils::extract::{Path, Query};

/// GET /campaigns/summary
pub async fn summaries(
    State(state): State<ServerState>,
    Query(query): Query<SummaryQuery>,
) -> Json<Vec<CampaignSummary>> {
    Json(state.campaigns.summaries(&query))
}

/// GET /campaigns/{id}/alerts
pub async fn alerts(
    State(state): State<ServerState>,
    Path(id): Path<CampaignId>,
) -> AppResult<Json<Vec<String>>> {
    state.campaigns.alerts(id).map(Json)
}

/// GET /campaigns/{id}/coupons
pub async fn coupons(
    State(state): State<ServerState>,
    Path(id): Path<CampaignId>,
) -> AppResult<Json<Vec<CouponRecord>>> {
    state.campaigns.coupons(id).map(Json)
}

/// GET /campaigns/{id}/sales
pub async fn sales(
    State(state): State<ServerState>,
    Path(id): Path<CampaignId>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<AggregateResult<SaleRecord>>> {
    state.campaigns.sales(id, &query).map(Json)
}

/// GET /campaigns/{id}/localities
pub async fn localities(
    State(state): State<ServerState>,
    Path(id): Path<CampaignId>,
) -> AppResult<Json<Vec<LocalityInvestment>>> {
    state.campaigns.localities(id).map(Json)
}

/// GET /campaigns/{id}/export
pub async fn export(
    State(state): State<ServerState>,
    Path(id): Path<CampaignId>,
) -> AppResult<Json<ExportDescriptor>> {
    state.campaigns.export(id).map(Json)
}
