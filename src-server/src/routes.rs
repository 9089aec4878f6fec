//! Route Handlers
//!
//! `/api/beers` and `/api/beers/{id}` relay the upstream answer unchanged on
//! success. Failures become the JSON error envelope via [`AppError`].

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;
use crate::upstream::{is_dot_segment, CatalogResponse};

pub async fn list_beers(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let response = state.catalog.list(query.as_deref()).await.map_err(|e| {
        error!("Error fetching beers: {e}");
        e
    })?;
    Ok(relay(response))
}

pub async fn get_beer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::MissingId);
    }
    if is_dot_segment(&id) {
        return Err(AppError::InvalidId(id));
    }

    let response = state.catalog.detail(&id).await.map_err(|e| {
        error!("Error fetching beer {id}: {e}");
        e
    })?;
    Ok(relay(response))
}

/// `/api/beers/` with nothing after the slash
pub async fn missing_id() -> AppError {
    AppError::MissingId
}

/// CORS pre-flight; headers come from the router layers
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn relay(response: CatalogResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (status, Json(response.body)).into_response()
}
