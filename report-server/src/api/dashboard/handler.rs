//! Dashboard API Handlers

use axum::extract::State;
use shared::models::WidgetUpdateRequest;

use crate::core::ServerState;
use crate::utils::extract::Json;
use crate::utils::{ApiResponse, AppResult};

/// GET /dashboard/widgets
pub async fn get_widgets(State(state): State<ServerState>) -> AppResult<axum::Json<Vec<String>>> {
    state.dashboard.widgets().map(axum::Json)
}

/// PUT /dashboard/widgets
pub async fn save_widgets(
    State(state): State<ServerState>,
    Json(payload): Json<WidgetUpdateRequest>,
) -> AppResult<ApiResponse<()>> {
    state.dashboard.save_widgets(payload.widgets)?;
    Ok(ApiResponse::message("Widget configuration saved successfully"))
}

/// POST /dashboard/widgets/reset
pub async fn reset_widgets(State(state): State<ServerState>) -> ApiResponse<()> {
    state.dashboard.reset_widgets();
    ApiResponse::message("Widgets restored to the default configuration")
}

/// GET /dashboard/data-sources
pub async fn data_sources(State(state): State<ServerState>) -> axum::Json<Vec<String>> {
    axum::Json(state.dashboard.data_sources())
}

/// GET /dashboard/chart-types
pub async fn chart_types(State(state): State<ServerState>) -> axum::Json<Vec<String>> {
    axum::Json(state.dashboard.chart_types())
}
