use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::any::Any;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use swiftwork::config::CorsConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    match config {
        CorsConfig::AnyOrigin => layer.allow_origin(AnyOrigin),
        CorsConfig::Origins(origins) => layer.allow_origin(origins.clone()),
    }
}

/// Turns a handler panic into the same `{"detail": ...}` body the error type
/// produces, so clients see one failure shape.
pub(crate) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unexpected internal error".to_string()
    };

    error!(%detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": detail })),
    )
        .into_response()
}

/// Cross-cutting layers shared by every route: panic capture, request
/// tracing and CORS.
pub(crate) fn with_service_layers(router: Router, cors: &CorsConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
}
