//! Request logging middleware
//!
//! Logs every incoming HTTP request with its request id, route and outcome.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Request logging middleware
///
/// Logs request start and completion with:
/// - Request ID (x-request-id)
/// - HTTP method and matched route
/// - Query string
/// - Response status
/// - Latency (ms)
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let query = uri.query().unwrap_or("");

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = %query,
        "Request started"
    );

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    let outcome = if status.is_server_error() {
        "server error"
    } else if status.is_client_error() {
        "client error"
    } else {
        "success"
    };

    if status.is_success() || status.is_redirection() {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            outcome,
            "Request completed"
        );
    } else {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            outcome,
            "Request completed"
        );
    }

    response
}
