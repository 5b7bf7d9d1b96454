//! Walkthrough link handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use revalis_core::{suggest_walkthroughs, WalkthroughSuggestion};

use super::games::store_error;
use super::handlers::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WalkthroughResponse {
    pub game: String,
    pub suggestions: Vec<WalkthroughSuggestion>,
}

/// GET /walkthroughs/{name}
///
/// The game does not have to be in the library.
pub async fn for_game(Path(name): Path<String>) -> Json<WalkthroughResponse> {
    let suggestions = suggest_walkthroughs(&name);
    Json(WalkthroughResponse {
        game: name,
        suggestions,
    })
}

/// GET /walkthroughs
///
/// Suggestions for every game in the library, keyed by name.
pub async fn for_library(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Vec<WalkthroughSuggestion>>>, ApiError> {
    let records = state.store().list().map_err(store_error)?;

    Ok(Json(
        records
            .into_iter()
            .map(|record| {
                let suggestions = suggest_walkthroughs(&record.name);
                (record.name, suggestions)
            })
            .collect(),
    ))
}
