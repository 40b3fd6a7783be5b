//! Region boundary GeoJSON handler.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::Response,
};

use basin_protocol::media_types;

use crate::state::AppState;

/// GET /basin/geojson - the region FeatureCollection as loaded at startup.
pub async fn geojson_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, media_types::GEO_JSON)
        .header(header::CACHE_CONTROL, "max-age=300")
        .body(state.engine.basins().geojson().to_string().into())
        .unwrap()
}
