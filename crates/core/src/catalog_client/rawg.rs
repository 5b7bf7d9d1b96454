//! RAWG (rawg.io) API client.
//!
//! RAWG authenticates with a `key` query parameter on every request.

use std::time::{Duration, Instant};

use futures::{stream, StreamExt, TryStreamExt};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::types::{CatalogEntry, ExternalGame};
use super::{CatalogClientError, ExternalCatalog};
use crate::config::RawgConfig;
use crate::metrics::{EXTERNAL_SERVICE_DURATION, EXTERNAL_SERVICE_REQUESTS};

/// RAWG API client.
pub struct RawgClient {
    client: Client,
    base_url: String,
    api_key: String,
    detail_concurrency: usize,
}

impl RawgClient {
    /// Create a new RAWG client.
    pub fn new(config: &RawgConfig) -> Result<Self, CatalogClientError> {
        if config.api_key.is_empty() {
            return Err(CatalogClientError::NotConfigured(
                "RAWG API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            detail_concurrency: config.detail_concurrency.max(1),
        })
    }

    /// Get the full record of one game.
    pub async fn get_game(&self, id: i64) -> Result<ExternalGame, CatalogClientError> {
        let url = format!("{}/games/{}", self.base_url, id);

        debug!("RAWG get game: id={}", id);

        self.get_json("game_detail", &url, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogClientError> {
        let start = Instant::now();
        let result = self.fetch_json(url, params).await;

        let status = if result.is_ok() { "success" } else { "error" };
        EXTERNAL_SERVICE_REQUESTS
            .with_label_values(&["rawg", operation, status])
            .inc();
        EXTERNAL_SERVICE_DURATION
            .with_label_values(&["rawg", operation])
            .observe(start.elapsed().as_secs_f64());

        result
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogClientError> {
        // Errors drop the URL: its query string carries the API key.
        let response = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogClientError::HttpError(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogClientError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response.json().await.map_err(|e| {
            CatalogClientError::ParseError(format!("{}: {}", url, e.without_url()))
        })
    }
}

#[async_trait::async_trait]
impl ExternalCatalog for RawgClient {
    async fn search_games(
        &self,
        query: &str,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<ExternalGame>, CatalogClientError> {
        let url = format!("{}/games", self.base_url);

        debug!(
            "RAWG game search: query='{}', page_size={}, page={}",
            query, page_size, page
        );

        let summaries: RawgListResponse<RawgGameSummary> = self
            .get_json(
                "game_search",
                &url,
                &[
                    ("search", query.to_string()),
                    ("page_size", page_size.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;

        let ids: Vec<i64> = summaries
            .results
            .into_iter()
            .filter_map(|summary| summary.id)
            .filter(|id| *id != 0)
            .collect();

        debug!("RAWG search returned {} ids, fetching details", ids.len());

        stream::iter(ids)
            .map(|id| self.get_game(id))
            .buffered(self.detail_concurrency)
            .try_collect()
            .await
    }

    async fn list_genres(&self) -> Result<Vec<CatalogEntry>, CatalogClientError> {
        let url = format!("{}/genres", self.base_url);
        let response: RawgListResponse<CatalogEntry> =
            self.get_json("genres", &url, &[]).await?;
        Ok(response.results)
    }

    async fn list_platforms(&self) -> Result<Vec<CatalogEntry>, CatalogClientError> {
        let url = format!("{}/platforms", self.base_url);
        let response: RawgListResponse<CatalogEntry> =
            self.get_json("platforms", &url, &[]).await?;
        Ok(response.results)
    }
}

// ============================================================================
// RAWG API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawgListResponse<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct RawgGameSummary {
    #[serde(default)]
    id: Option<i64>,
}
