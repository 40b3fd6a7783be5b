//! Health and readiness handlers.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Serialize;

use basin_protocol::media_types;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub regions: usize,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (region dataset loaded)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let regions = state.engine.basins().regions().len();
    let is_ready = regions > 0;

    let response = ReadyResponse {
        ready: is_ready,
        regions,
    };

    let status = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let json = serde_json::to_string(&response).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, media_types::JSON)
        .body(json.into())
        .unwrap()
}
