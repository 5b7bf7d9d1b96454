//! RAWG genre and platform passthrough.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use revalis_core::CatalogEntry;

use super::handlers::{api_error, ApiError};
use crate::state::AppState;

/// GET /genres
pub async fn list_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    state
        .external_catalog()
        .list_genres()
        .await
        .map(Json)
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, e))
}

/// GET /platforms
pub async fn list_platforms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    state
        .external_catalog()
        .list_platforms()
        .await
        .map(Json)
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, e))
}
