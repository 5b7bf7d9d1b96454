//! Mock external catalog for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog_client::{CatalogClientError, CatalogEntry, ExternalCatalog, ExternalGame};

/// A recorded game search for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub page_size: u32,
    pub page: u32,
}

/// Mock implementation of the ExternalCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable games, genres and platforms
/// - Track searches for assertions
/// - Simulate failures
///
/// Searches match games whose name contains the query, case-insensitively,
/// and page through them in insertion order.
///
/// # Example
///
/// ```rust,ignore
/// use revalis_core::testing::{MockExternalCatalog, fixtures};
///
/// let catalog = MockExternalCatalog::new();
/// catalog.add_game(fixtures::external_game(3498, "Grand Theft Auto V")).await;
///
/// let results = catalog.search_games("grand", 20, 1).await?;
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockExternalCatalog {
    /// Detail payloads, in search order.
    games: Arc<RwLock<Vec<ExternalGame>>>,
    genres: Arc<RwLock<Vec<CatalogEntry>>>,
    platforms: Arc<RwLock<Vec<CatalogEntry>>>,
    /// Recorded searches.
    searches: Arc<RwLock<Vec<RecordedSearch>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<CatalogClientError>>>,
}

impl Default for MockExternalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExternalCatalog {
    /// Create a new empty mock external catalog.
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(Vec::new())),
            genres: Arc::new(RwLock::new(Vec::new())),
            platforms: Arc::new(RwLock::new(Vec::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Add a game detail payload.
    pub async fn add_game(&self, game: ExternalGame) {
        self.games.write().await.push(game);
    }

    /// Replace all games at once.
    pub async fn set_games(&self, games: Vec<ExternalGame>) {
        *self.games.write().await = games;
    }

    pub async fn set_genres(&self, genres: Vec<CatalogEntry>) {
        *self.genres.write().await = genres;
    }

    pub async fn set_platforms(&self, platforms: Vec<CatalogEntry>) {
        *self.platforms.write().await = platforms;
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded searches.
    pub async fn recorded_queries(&self) -> Vec<RecordedSearch> {
        self.searches.read().await.clone()
    }

    /// Clear recorded searches.
    pub async fn clear_recorded(&self) {
        self.searches.write().await.clear();
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogClientError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }

    async fn take_error(&self) -> Option<CatalogClientError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl ExternalCatalog for MockExternalCatalog {
    async fn search_games(
        &self,
        query: &str,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<ExternalGame>, CatalogClientError> {
        self.searches.write().await.push(RecordedSearch {
            query: query.to_string(),
            page_size,
            page,
        });

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let query_lower = query.to_lowercase();
        let skip = page.saturating_sub(1) as usize * page_size as usize;

        let results = self
            .games
            .read()
            .await
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&query_lower))
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(results)
    }

    async fn list_genres(&self) -> Result<Vec<CatalogEntry>, CatalogClientError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(self.genres.read().await.clone())
    }

    async fn list_platforms(&self) -> Result<Vec<CatalogEntry>, CatalogClientError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(self.platforms.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_search_matches_name_and_records() {
        let catalog = MockExternalCatalog::new();
        catalog.add_game(fixtures::external_game(1, "Halo 3")).await;
        catalog.add_game(fixtures::external_game(2, "Portal")).await;

        let results = catalog.search_games("HALO", 20, 1).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);

        let searches = catalog.recorded_queries().await;
        assert_eq!(
            searches,
            vec![RecordedSearch {
                query: "HALO".to_string(),
                page_size: 20,
                page: 1,
            }]
        );
    }

    #[tokio::test]
    async fn test_search_pages() {
        let catalog = MockExternalCatalog::new();
        for id in 1..=5 {
            catalog
                .add_game(fixtures::external_game(id, &format!("Game {}", id)))
                .await;
        }

        let page2 = catalog.search_games("game", 2, 2).await.unwrap();
        let ids: Vec<_> = page2.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 4]);

        assert!(catalog.search_games("game", 2, 4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_injection_is_one_shot() {
        let catalog = MockExternalCatalog::new();
        catalog
            .set_next_error(CatalogClientError::ParseError("boom".to_string()))
            .await;

        assert!(catalog.list_genres().await.is_err());
        assert!(catalog.list_genres().await.is_ok());
    }
}
