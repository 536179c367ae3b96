//! Campaigns API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/campaigns", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/summary", get(handler::summaries))
        .route("/{id}/alerts", get(handler::alerts))
        .route("/{id}/coupons", get(handler::coupons))
        .route("/{id}/sales", get(handler::sales))
        .route("/{id}/localities", get(handler::localities))
        .route("/{id}/export", get(handler::export))
}
