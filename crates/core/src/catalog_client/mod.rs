//! Client for the RAWG video game database.
//!
//! A search is a two-stage fetch: one call for the result summaries, then one
//! detail call per summary. Only the detail payloads are returned.

mod rawg;
mod types;

pub use rawg::RawgClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the external catalog.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    /// HTTP request failed (network fault, timeout).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for external game catalogs.
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    /// Search games and return the full detail record of every hit.
    ///
    /// Hits without an id are skipped. Any failed call fails the whole search.
    async fn search_games(
        &self,
        query: &str,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<ExternalGame>, CatalogClientError>;

    /// List the genres known to the catalog.
    async fn list_genres(&self) -> Result<Vec<CatalogEntry>, CatalogClientError>;

    /// List the platforms known to the catalog.
    async fn list_platforms(&self) -> Result<Vec<CatalogEntry>, CatalogClientError>;
}
