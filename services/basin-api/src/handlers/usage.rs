//! Usage metadata handler.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Response};

use basin_protocol::UsageResponse;

use crate::handlers::terms::json_response;
use crate::state::AppState;

/// GET /basin - service usage metadata (models, regions, request syntax).
pub async fn usage_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let usage = UsageResponse::new(
        state
            .engine
            .basins()
            .regions()
            .iter()
            .map(|r| r.basin),
    );
    json_response(StatusCode::OK, &usage)
}
