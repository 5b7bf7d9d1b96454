//! Import of RAWG search results into the local library.
//!
//! Each page of a RAWG search is fetched in turn and every game is persisted
//! unless a record with the same name already exists. Existing records are
//! returned as they are, never refreshed.

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog_client::{CatalogClientError, ExternalCatalog, ExternalGame};
use crate::config::ImportConfig;
use crate::metrics::IMPORTED_GAMES;
use crate::store::{GameDraft, GameRecord, GameStore, Genre, Platform, StoreError};

/// Errors for imports.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid import request: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("External catalog failed: {0}")]
    Upstream(#[from] CatalogClientError),
}

/// Import `pages` pages of RAWG results for `query`.
///
/// Returns one record per imported game, in the order RAWG returned them.
/// The first failure aborts the import; records persisted before it stay.
pub async fn import_games(
    store: &dyn GameStore,
    catalog: &dyn ExternalCatalog,
    query: &str,
    pages: u32,
    config: &ImportConfig,
) -> Result<Vec<GameRecord>, ImportError> {
    if pages == 0 || pages > config.max_pages {
        return Err(ImportError::InvalidParams(format!(
            "pages must be between 1 and {}, got {}",
            config.max_pages, pages
        )));
    }

    info!(query = %query, pages, "Starting import");

    let mut records = Vec::new();
    for page in 1..=pages {
        let games = catalog.search_games(query, config.page_size, page).await?;
        debug!(page, count = games.len(), "Importing page");

        for game in games {
            records.push(store_game(store, game)?);
        }
    }

    info!(query = %query, imported = records.len(), "Import complete");
    Ok(records)
}

fn store_game(store: &dyn GameStore, game: ExternalGame) -> Result<GameRecord, ImportError> {
    let (record, created) = store.get_or_create(draft_from_external(game))?;
    let outcome = if created { "created" } else { "existing" };
    IMPORTED_GAMES.with_label_values(&[outcome]).inc();
    Ok(record)
}

/// Map a RAWG payload onto a draft.
///
/// Platforms are stored without icons; icons are only resolved for live
/// search results.
pub fn draft_from_external(game: ExternalGame) -> GameDraft {
    GameDraft {
        name: game.name,
        released: game.released,
        rating: game.rating,
        description: game.description_raw,
        developer: game.developers.into_iter().next().and_then(|d| d.name),
        platforms: game
            .platforms
            .into_iter()
            .filter_map(|entry| entry.platform)
            .map(|p| Platform {
                id: p.id.unwrap_or(0),
                name: p.name.unwrap_or_default(),
                icon: None,
            })
            .collect(),
        genres: game
            .genres
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect(),
        cover_image_url: game.background_image,
    }
}
