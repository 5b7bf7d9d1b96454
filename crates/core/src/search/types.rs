//! Types for the merged game search.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog_client::CatalogClientError;
use crate::store::{GameRecord, Genre, Platform, StoreError};

/// Largest page a search may return.
pub const MAX_LIMIT: u32 = 100;

/// Page size when the caller gives none.
pub const DEFAULT_LIMIT: u32 = 20;

/// Query parameters for a merged search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchParams {
    /// Free-text name query. Empty or absent skips the external phase.
    #[serde(default)]
    pub query: Option<String>,
    /// Keep only games tagged with this genre id.
    #[serde(default)]
    pub genre: Option<i64>,
    /// Keep only games available on this platform id.
    #[serde(default)]
    pub platform: Option<i64>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub max_rating: Option<f64>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            genre: None,
            platform: None,
            min_rating: None,
            max_rating: None,
            sort: SortOrder::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchParams {
    /// Params with only a query set.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// The query, if it is non-empty.
    pub fn text_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Reject params the pipeline cannot serve.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(SearchError::InvalidParams(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.limit
            )));
        }
        Ok(())
    }
}

/// Sort key of a merged search.
///
/// Unrecognized values fall back to [`SortOrder::Name`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortOrder {
    /// Ascending, case-insensitive.
    #[default]
    Name,
    /// Newest first.
    Released,
    /// Highest first; unrated counts as 0.
    Rating,
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::parse(&value)
    }
}

impl SortOrder {
    /// Parse a sort key leniently.
    pub fn parse(value: &str) -> Self {
        match value {
            "released" => SortOrder::Released,
            "rating" => SortOrder::Rating,
            _ => SortOrder::Name,
        }
    }
}

/// A search hit, from the local store or from RAWG.
///
/// `id` is the store id for local hits and the RAWG id for external ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSummary {
    pub id: i64,
    pub name: String,
    pub released: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub platforms: Vec<Platform>,
    pub genres: Vec<Genre>,
    pub cover_image_url: Option<String>,
}

impl From<GameRecord> for GameSummary {
    fn from(record: GameRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            released: record.released,
            rating: record.rating,
            description: record.description,
            developer: record.developer,
            platforms: record.platforms,
            genres: record.genres,
            cover_image_url: record.cover_image_url,
        }
    }
}

/// Errors for the merged search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search parameters: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("External catalog failed: {0}")]
    Upstream(#[from] CatalogClientError),
}
