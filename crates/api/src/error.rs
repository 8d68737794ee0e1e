//! API error types with HTTP response mapping.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Body of every error response produced by the service.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,
    /// The path exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Internal server error.
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!(error = %msg, "internal server error");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Converts a handler panic into a 500 response.
///
/// The panic payload is logged, never returned to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(message).into_response()
}

/// Invalid configuration detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {value} (expected an integer in 0..=65535)")]
    InvalidPort { value: String },

    #[error("invalid LOG_FORMAT: {value} (expected text or json)")]
    InvalidLogFormat { value: String },

    #[error("invalid RUST_LOG: {value}: {reason}")]
    InvalidLogFilter { value: String, reason: String },
}

/// Failures that prevent the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
