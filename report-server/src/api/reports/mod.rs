//! Reports API - expense and investment reports
//!
//! | Path | Query |
//! |------|-------|
//! | /reports/expenses | campaign_id, from, to |
//! | /reports/expenses/evolution | cost, from |
//! | /reports/expenses/export | cost, from, download |
//! | /reports/investment/locality | locality, from, to |
//! | /reports/investment/location | campaign_id, from, to |
//! | /reports/investment/map | campaign_id |
//! | /reports/investment/chart | campaign_id, metric |
//! | /reports/investment/product | campaign_id |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/expenses", get(handler::campaign_expenses))
        .route("/expenses/evolution", get(handler::expense_evolution))
        .route("/expenses/export", get(handler::expense_export))
        .route("/investment/locality", get(handler::locality_investment))
        .route("/investment/location", get(handler::location_investment))
        .route("/investment/map", get(handler::investment_map))
        .route("/investment/chart", get(handler::investment_chart))
        .route("/investment/product", get(handler::product_investment))
}
