//! Router assembly

use std::any::Any;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::response::{IntoResponse, Response};
use http::{HeaderName, HeaderValue, Uri};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware;
use crate::utils::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator
#[derive(Clone, Copy, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Turn a handler panic into a 500 with the generic error body
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("Handler panicked: {detail}")).into_response()
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::reports::router())
        .merge(api::campaigns::router())
        .merge(api::dashboard::router())
        .fallback(route_not_found)
}

/// Build the fully layered application
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app() -> Router<ServerState> {
    with_layers(build_router())
}

/// Wrap a router in the middleware stack
pub fn with_layers(router: Router<ServerState>) -> Router<ServerState> {
    router
        // Panics become 500 responses instead of dropped connections
        .layer(CatchPanicLayer::custom(panic_response))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing spans
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
