//! Basin term resolution handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode, Uri},
    response::Response,
};

use basin_engine::{normalize, ValueSource};
use basin_protocol::{media_types, BasinError, ErrorResponse, TermQuery, TermResponse};

use crate::state::AppState;

/// GET /basin/local-data - resolve terms from the precomputed local grids.
pub async fn local_data_handler(
    Extension(state): Extension<Arc<AppState>>,
    uri: Uri,
    Query(params): Query<TermQuery>,
) -> Response {
    resolve(&state, &state.local, params, uri).await
}

/// GET /basin/arc-data - resolve terms via the ArcGIS point service.
pub async fn arc_data_handler(
    Extension(state): Extension<Arc<AppState>>,
    uri: Uri,
    Query(params): Query<TermQuery>,
) -> Response {
    resolve(&state, &state.arcgis, params, uri).await
}

async fn resolve(
    state: &AppState,
    source: &dyn ValueSource,
    params: TermQuery,
    uri: Uri,
) -> Response {
    // Normalized up front so the envelope echoes the cell actually queried.
    let coordinate = match normalize(params.latitude, params.longitude, source.spacing()) {
        Ok(c) => c,
        Err(e) => return error_response(&e, &uri),
    };

    match state
        .engine
        .resolve(
            params.latitude,
            params.longitude,
            params.model.as_deref(),
            source,
        )
        .await
    {
        Ok(term) => {
            let body = TermResponse::new(
                uri.to_string(),
                coordinate.latitude,
                coordinate.longitude,
                &term,
            );
            json_response(StatusCode::OK, &body)
        }
        Err(e) => {
            tracing::warn!(
                latitude = params.latitude,
                longitude = params.longitude,
                error = %e,
                "Basin term resolution failed"
            );
            error_response(&e, &uri)
        }
    }
}

pub(crate) fn error_response(err: &BasinError, uri: &Uri) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse::new(err.to_string(), uri.to_string());
    json_response(status, &body)
}

pub(crate) fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    let json = serde_json::to_string(body).unwrap_or_default();
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, media_types::JSON)
        .body(json.into())
        .unwrap()
}
