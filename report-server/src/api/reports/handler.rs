//! Reports API Handlers

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use shared::models::{
    AggregateResult, ChartPoint, ExpenseRecord, InvestmentRecord, LocationInvestment, MapPoint,
    ProductInvestment,
};

use crate::core::ServerState;
use crate::services::report_service::{
    CampaignQuery, CampaignRangeQuery, ChartQuery, EvolutionQuery, ExportQuery, LocalityQuery,
};
use crate::utils::AppResult;
use crate::utils::extract::Query;

/// GET /reports/expenses
pub async fn campaign_expenses(
    State(state): State<ServerState>,
    Query(query): Query<CampaignRangeQuery>,
) -> AppResult<Json<AggregateResult<ExpenseRecord>>> {
    state.reports.campaign_expenses(&query).map(Json)
}

/// GET /reports/expenses/evolution
pub async fn expense_evolution(
    State(state): State<ServerState>,
    Query(query): Query<EvolutionQuery>,
) -> AppResult<Json<Vec<ExpenseRecord>>> {
    state.reports.expense_evolution(&query).map(Json)
}

/// GET /reports/expenses/export
///
/// With `download=true` the series is sent as a pretty-printed JSON file
/// attachment; otherwise as a plain JSON body.
pub async fn expense_export(
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<Response> {
    let (cost, series) = state.reports.expense_export(&query)?;

    if !query.download {
        return Ok(Json(series).into_response());
    }

    let file = state.reports.render_export(&cost, &series)?;
    tracing::info!(cost = %cost, rows = series.len(), file = %file.filename, "Expense export downloaded");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", file.filename),
            ),
        ],
        file.body,
    )
        .into_response())
}

/// GET /reports/investment/locality
pub async fn locality_investment(
    State(state): State<ServerState>,
    Query(query): Query<LocalityQuery>,
) -> AppResult<Json<AggregateResult<InvestmentRecord>>> {
    state.reports.locality_investment(&query).map(Json)
}

/// GET /reports/investment/location
pub async fn location_investment(
    State(state): State<ServerState>,
    Query(query): Query<CampaignRangeQuery>,
) -> AppResult<Json<Vec<LocationInvestment>>> {
    state.reports.location_investment(&query).map(Json)
}

/// GET /reports/investment/map
pub async fn investment_map(
    State(state): State<ServerState>,
    Query(query): Query<CampaignQuery>,
) -> AppResult<Json<Vec<MapPoint>>> {
    state.reports.investment_map(&query).map(Json)
}

/// GET /reports/investment/chart
pub async fn investment_chart(
    State(state): State<ServerState>,
    Query(query): Query<ChartQuery>,
) -> AppResult<Json<Vec<ChartPoint>>> {
    state.reports.investment_chart(&query).map(Json)
}

/// GET /reports/investment/product
pub async fn product_investment(
    State(state): State<ServerState>,
    Query(query): Query<CampaignQuery>,
) -> AppResult<Json<Vec<ProductInvestment>>> {
    state.reports.product_investment(&query).map(Json)
}
