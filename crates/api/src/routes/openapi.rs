//! OpenAPI document carrying the service title and description.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDoc;

use crate::{AppState, ServiceInfo};

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::check),
    components(schemas(crate::routes::health::HealthResponse))
)]
pub struct ApiDoc;

/// Builds the document once, stamping it with the service metadata.
pub fn document(info: &ServiceInfo) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    doc.info.title = info.title.clone();
    doc.info.description = Some(info.description.clone());
    doc.info.version = info.version.clone();
    doc
}

/// GET /openapi.json
pub async fn get(State(state): State<Arc<AppState>>) -> Json<OpenApiDoc> {
    Json(state.openapi.clone())
}
