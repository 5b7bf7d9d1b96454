//! Merged game search.
//!
//! A search reads the local library, asks RAWG for the same query, and turns
//! both result sets into one deduplicated, filtered, sorted page:
//!
//! 1. Local phase: store search on name substring and rating bounds
//! 2. External phase (non-empty query only): RAWG search, first page of 20
//! 3. Merge by exact name, external hits replacing local ones in place
//! 4. Genre and platform filters
//! 5. Stable sort, then the `[offset, offset + limit)` window
//!
//! A RAWG failure fails the whole search; there is no local-only fallback.

mod merge;
mod normalize;
mod types;

pub use merge::{apply_filters, merge_results, paginate, sort_results};
pub use normalize::{from_external, resolve_platform_icon, DEFAULT_ICON};
pub use types::*;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog_client::ExternalCatalog;
use crate::metrics::SEARCH_RESULTS;
use crate::store::{GameFilter, GameStore};

/// Page size of the external phase.
pub const EXTERNAL_PAGE_SIZE: u32 = 20;

/// Runs merged searches over a store and an external catalog.
pub struct GameSearch {
    store: Arc<dyn GameStore>,
    catalog: Arc<dyn ExternalCatalog>,
}

impl GameSearch {
    pub fn new(store: Arc<dyn GameStore>, catalog: Arc<dyn ExternalCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Run a merged search.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<GameSummary>, SearchError> {
        params.validate()?;

        let query = params.text_query();

        let filter = GameFilter {
            name_contains: query.map(str::to_string),
            min_rating: params.min_rating,
            max_rating: params.max_rating,
        };
        let local: Vec<GameSummary> = self
            .store
            .search(&filter)?
            .into_iter()
            .map(GameSummary::from)
            .collect();
        SEARCH_RESULTS
            .with_label_values(&["local"])
            .observe(local.len() as f64);

        let external: Vec<GameSummary> = match query {
            Some(query) => {
                let games = self
                    .catalog
                    .search_games(query, EXTERNAL_PAGE_SIZE, 1)
                    .await
                    .inspect_err(|e| warn!(query = %query, error = %e, "External search failed"))?;
                SEARCH_RESULTS
                    .with_label_values(&["external"])
                    .observe(games.len() as f64);
                games.into_iter().map(from_external).collect()
            }
            None => Vec::new(),
        };

        debug!(
            local = local.len(),
            external = external.len(),
            "Merging search results"
        );

        let merged = merge_results(local, external);
        let mut results = apply_filters(merged, params.genre, params.platform);
        sort_results(&mut results, params.sort);

        Ok(paginate(results, params.offset, params.limit as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_client::{
        CatalogClientError, ExternalGame, ExternalGenre, ExternalPlatform, ExternalPlatformEntry,
    };
    use crate::store::{GameDraft, Genre, Platform, SqliteGameStore};
    use crate::testing::{fixtures, MockExternalCatalog};
    use std::sync::{Mutex, MutexGuard};

    // Searches record into global histograms; one harness at a time keeps
    // sample counts exact.
    static SEARCH_LOCK: Mutex<()> = Mutex::new(());

    struct Harness {
        store: Arc<SqliteGameStore>,
        catalog: Arc<MockExternalCatalog>,
        search: GameSearch,
        _guard: MutexGuard<'static, ()>,
    }

    fn harness() -> Harness {
        let _guard = SEARCH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let store = Arc::new(SqliteGameStore::in_memory().unwrap());
        let catalog = Arc::new(MockExternalCatalog::new());
        let search = GameSearch::new(store.clone(), catalog.clone());
        Harness {
            store,
            catalog,
            search,
            _guard,
        }
    }

    fn draft(name: &str, rating: Option<f64>) -> GameDraft {
        GameDraft {
            rating,
            ..GameDraft::named(name)
        }
    }

    fn names(results: &[GameSummary]) -> Vec<&str> {
        results.iter().map(|s| s.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_local_only_without_query() {
        let h = harness();
        h.store.create(draft("Doom", Some(4.0))).unwrap();
        h.store.create(draft("Anno 1800", None)).unwrap();
        h.catalog.add_game(fixtures::external_game(1, "Doom Eternal")).await;

        let results = h.search.search(&SearchParams::default()).await.unwrap();

        assert_eq!(names(&results), vec!["Anno 1800", "Doom"]);
        assert!(h.catalog.recorded_queries().await.is_empty());
    }

    #[tokio::test]
    async fn test_external_results_observed_only_when_phase_runs() {
        let h = harness();
        let external = SEARCH_RESULTS.with_label_values(&["external"]);
        let before = external.get_sample_count();

        h.search.search(&SearchParams::default()).await.unwrap();
        h.search.search(&SearchParams::with_query("")).await.unwrap();
        assert_eq!(external.get_sample_count(), before);

        h.search.search(&SearchParams::with_query("halo")).await.unwrap();
        assert_eq!(external.get_sample_count(), before + 1);
    }

    #[tokio::test]
    async fn test_empty_query_skips_external_phase() {
        let h = harness();
        h.store.create(draft("Doom", None)).unwrap();

        let results = h.search.search(&SearchParams::with_query("")).await.unwrap();

        assert_eq!(names(&results), vec!["Doom"]);
        assert!(h.catalog.recorded_queries().await.is_empty());
    }

    #[tokio::test]
    async fn test_external_wins_name_collision() {
        let h = harness();
        let local = h.store.create(draft("Halo", Some(2.0))).unwrap();

        let mut external = fixtures::external_game(986, "Halo");
        external.rating = Some(4.2);
        external.platforms = vec![ExternalPlatformEntry {
            platform: Some(ExternalPlatform {
                id: Some(1),
                name: Some("Xbox One".to_string()),
            }),
        }];
        h.catalog.add_game(external).await;

        let results = h.search.search(&SearchParams::with_query("halo")).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 986);
        assert_ne!(results[0].id, local.id);
        assert_eq!(results[0].rating, Some(4.2));
        assert_eq!(
            results[0].platforms,
            vec![Platform {
                id: 1,
                name: "Xbox One".to_string(),
                icon: Some("xbox.png".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_query_is_sent_with_first_page_of_twenty() {
        let h = harness();

        h.search.search(&SearchParams::with_query("zelda")).await.unwrap();

        let queries = h.catalog.recorded_queries().await;
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query, "zelda");
        assert_eq!(queries[0].page_size, 20);
        assert_eq!(queries[0].page, 1);
    }

    #[tokio::test]
    async fn test_rating_bounds_apply_to_local_phase() {
        let h = harness();
        h.store.create(draft("Low", Some(1.0))).unwrap();
        h.store.create(draft("Mid", Some(3.0))).unwrap();
        h.store.create(draft("High", Some(4.8))).unwrap();
        h.store.create(draft("Unrated", None)).unwrap();

        let params = SearchParams {
            min_rating: Some(2.0),
            max_rating: Some(4.0),
            ..Default::default()
        };
        let results = h.search.search(&params).await.unwrap();

        assert_eq!(names(&results), vec!["Mid"]);
    }

    #[tokio::test]
    async fn test_genre_and_platform_filters_cover_both_sources() {
        let h = harness();
        h.store
            .create(GameDraft {
                genres: vec![Genre {
                    id: Some(4),
                    name: Some("Action".to_string()),
                }],
                ..GameDraft::named("Local Action")
            })
            .unwrap();
        h.store.create(GameDraft::named("Local Puzzle")).unwrap();

        let mut external = fixtures::external_game(2, "External Action");
        external.genres = vec![ExternalGenre {
            id: Some(4),
            name: Some("Action".to_string()),
        }];
        h.catalog.add_game(external).await;
        h.catalog.add_game(fixtures::external_game(3, "External Other")).await;

        let params = SearchParams {
            query: Some("a".to_string()),
            genre: Some(4),
            ..Default::default()
        };
        let results = h.search.search(&params).await.unwrap();

        assert_eq!(names(&results), vec!["External Action", "Local Action"]);
    }

    #[tokio::test]
    async fn test_sort_by_rating() {
        let h = harness();
        h.store.create(draft("Game A", None)).unwrap();
        h.store.create(draft("Game B", Some(3.5))).unwrap();
        h.store.create(draft("Game C", Some(1.0))).unwrap();

        let params = SearchParams {
            sort: SortOrder::Rating,
            ..Default::default()
        };
        let results = h.search.search(&params).await.unwrap();

        let ratings: Vec<_> = results.iter().map(|s| s.rating).collect();
        assert_eq!(ratings, vec![Some(3.5), Some(1.0), None]);
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let h = harness();
        for name in ["One", "Two", "Three"] {
            h.store.create(GameDraft::named(name)).unwrap();
        }

        let params = SearchParams {
            limit: 1,
            offset: 5,
            ..Default::default()
        };
        let results = h.search.search(&params).await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_limit_rejected_before_any_io() {
        let h = harness();

        let params = SearchParams {
            query: Some("halo".to_string()),
            limit: 500,
            ..Default::default()
        };
        let result = h.search.search(&params).await;

        assert!(matches!(result, Err(SearchError::InvalidParams(_))));
        assert!(h.catalog.recorded_queries().await.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_fails_search() {
        let h = harness();
        h.store.create(GameDraft::named("Halo")).unwrap();
        h.catalog
            .set_next_error(CatalogClientError::ApiError {
                status: 503,
                message: "unavailable".to_string(),
            })
            .await;

        let result = h.search.search(&SearchParams::with_query("halo")).await;

        assert!(matches!(result, Err(SearchError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_external_game_without_details_keeps_defaults() {
        let h = harness();
        h.catalog
            .add_game(ExternalGame {
                id: 5,
                name: "Sparse".to_string(),
                ..Default::default()
            })
            .await;

        let results = h.search.search(&SearchParams::with_query("sparse")).await.unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].platforms.is_empty());
        assert!(results[0].genres.is_empty());
        assert!(results[0].description.is_none());
    }
}
