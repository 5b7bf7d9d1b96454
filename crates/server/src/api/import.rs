//! RAWG import handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;
use revalis_core::{import_games, GameRecord, ImportError};

use super::games::store_error;
use super::handlers::{api_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImportParams {
    pub query: String,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_pages() -> u32 {
    1
}

/// POST /import?query=...&pages=...
///
/// Requires the import key; see `middleware::import_auth_middleware`.
pub async fn import(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImportParams>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    import_games(
        state.store(),
        state.external_catalog(),
        &params.query,
        params.pages,
        &state.config().import,
    )
    .await
    .map(Json)
    .map_err(|e| {
        warn!(query = %params.query, error = %e, "Import failed");
        match e {
            ImportError::InvalidParams(_) => api_error(StatusCode::BAD_REQUEST, e),
            ImportError::Upstream(_) => api_error(StatusCode::BAD_GATEWAY, e),
            ImportError::Store(e) => store_error(e),
        }
    })
}
