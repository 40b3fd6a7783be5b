//! Basin term HTTP service.
//!
//! Resolves z1p0/z2p5 basin depth terms over HTTP, from either the local
//! precomputed grids (`/basin/local-data`) or the remote ArcGIS basin-model
//! service (`/basin/arc-data`). The service root returns usage metadata and
//! `/basin/geojson` returns the region boundaries.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Usage metadata
        .route("/basin", get(handlers::usage::usage_handler))
        .route("/basin/", get(handlers::usage::usage_handler))
        // Region boundaries
        .route("/basin/geojson", get(handlers::geojson::geojson_handler))
        // Term resolution
        .route(
            "/basin/local-data",
            get(handlers::terms::local_data_handler),
        )
        .route("/basin/arc-data", get(handlers::terms::arc_data_handler))
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
