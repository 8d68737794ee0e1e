//! HTTP service for the Azure integration tutorial.
//!
//! Exposes a liveness endpoint, an OpenAPI document carrying the service
//! metadata, and Prometheus metrics, with structured logging (tracing).

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::fmt;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::OpenApi as OpenApiDoc;

pub const SERVICE_TITLE: &str = "Tutorial Azure Integration API";
pub const SERVICE_DESCRIPTION: &str = "API básica para o tutorial de integração com o Azure.";

/// Human-readable metadata published through the OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl ServiceInfo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new(SERVICE_TITLE, SERVICE_DESCRIPTION)
    }
}

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub info: ServiceInfo,
    pub openapi: OpenApiDoc,
}

impl AppState {
    pub fn new(info: ServiceInfo) -> Self {
        let openapi = routes::openapi::document(&info);
        Self { info, openapi }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/openapi.json", get(routes::openapi::get))
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state with the built-in service metadata.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::new(ServiceInfo::default()))
}
