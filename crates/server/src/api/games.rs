//! Game record and search handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};
use revalis_core::{
    BulkInsertResult, GameDraft, GamePatch, GameRecord, GameSummary, SearchError, SearchParams,
    StoreError,
};

use super::handlers::{api_error, ApiError};
use crate::state::AppState;

pub(crate) fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::NotFound(_) => api_error(StatusCode::NOT_FOUND, e),
        StoreError::Conflict(_) => api_error(StatusCode::CONFLICT, e),
        _ => api_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

fn search_error(e: SearchError) -> ApiError {
    match e {
        SearchError::InvalidParams(_) => api_error(StatusCode::BAD_REQUEST, e),
        SearchError::Upstream(_) => api_error(StatusCode::BAD_GATEWAY, e),
        SearchError::Store(e) => store_error(e),
    }
}

/// GET /games
pub async fn list_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    state.store().list().map(Json).map_err(store_error)
}

/// GET /games/{id}
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<GameRecord>, ApiError> {
    state.store().get(id).map(Json).map_err(store_error)
}

/// POST /games
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<GameDraft>,
) -> Result<Json<GameRecord>, ApiError> {
    match state.store().create(draft) {
        Ok(record) => {
            info!(id = record.id, name = %record.name, "Game created");
            Ok(Json(record))
        }
        Err(e) => {
            warn!(error = %e, "Game create rejected");
            Err(store_error(e))
        }
    }
}

/// POST /games/bulk
///
/// Always 200; rejected drafts are listed in `errors`.
pub async fn create_games_bulk(
    State(state): State<Arc<AppState>>,
    Json(drafts): Json<Vec<GameDraft>>,
) -> Json<BulkInsertResult> {
    let result = state.store().create_bulk(drafts);
    info!(
        inserted = result.inserted.len(),
        rejected = result.errors.len(),
        "Bulk insert finished"
    );
    Json(result)
}

/// PUT /games/{id}
pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(patch): Json<GamePatch>,
) -> Result<Json<GameRecord>, ApiError> {
    state.store().update(id, patch).map(Json).map_err(store_error)
}

/// DELETE /games/{id}
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store().delete(id).map_err(store_error)?;
    info!(id, "Game deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /games/search
///
/// Local records merged with live RAWG results.
pub async fn search_games(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    state
        .search()
        .search(&params)
        .await
        .map(Json)
        .map_err(search_error)
}
