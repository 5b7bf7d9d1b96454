use axum::{extract::State, http::header, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use revalis_core::SanitizedConfig;

use crate::metrics::encode_metrics;
use crate::state::AppState;

/// Error body shared by every handler
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of a handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, error: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn index() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("list_games", "/games"),
        ("get_game_by_id", "/games/{id}"),
        ("add_game", "/games"),
        ("bulk_insert", "/games/bulk"),
        ("search", "/games/search"),
        ("genres", "/genres"),
        ("platforms", "/platforms"),
        ("walkthroughs", "/walkthroughs/{name}"),
        ("import", "/import"),
    ]);

    Json(IndexResponse {
        message: "Welcome to Revalis API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
