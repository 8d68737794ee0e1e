//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod openapi;

use crate::error::ApiError;

/// Fallback for paths with no registered route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for registered paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
