//! Dashboard API - widget configuration and catalogs
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /dashboard/widgets | GET | Current widget list |
//! | /dashboard/widgets | PUT | Replace widget list |
//! | /dashboard/widgets/reset | POST | Restore default widgets |
//! | /dashboard/data-sources | GET | Available data sources |
//! | /dashboard/chart-types | GET | Available chart types |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/widgets",
            get(handler::get_widgets).put(handler::save_widgets),
        )
        .route("/widgets/reset", post(handler::reset_widgets))
        .route("/data-sources", get(handler::data_sources))
        .route("/chart-types", get(handler::chart_types))
}
