//! Types for the local game record store.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A platform a game is available on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    /// Icon file name (e.g. "playstation.png"), if one was resolved.
    #[serde(default)]
    pub icon: Option<String>,
}

/// A genre tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A persisted game record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// Store-assigned id.
    pub id: i64,
    /// Unique across all records.
    pub name: String,
    pub released: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub developer: Option<String>,
    pub platforms: Vec<Platform>,
    pub genres: Vec<Genre>,
    pub cover_image_url: Option<String>,
}

/// A game record that has not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDraft {
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl GameDraft {
    /// Draft with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            released: None,
            rating: None,
            description: None,
            developer: None,
            platforms: Vec::new(),
            genres: Vec::new(),
            cover_image_url: None,
        }
    }

    /// Attach a store-assigned id.
    pub fn into_record(self, id: i64) -> GameRecord {
        GameRecord {
            id,
            name: self.name,
            released: self.released,
            rating: self.rating,
            description: self.description,
            developer: self.developer,
            platforms: self.platforms,
            genres: self.genres,
            cover_image_url: self.cover_image_url,
        }
    }
}

/// Partial update of a game record.
///
/// A field left out of the JSON body is `None` and keeps its stored value.
/// For nullable columns an explicit `null` is `Some(None)` and clears it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GamePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub released: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub developer: Option<Option<String>>,
    #[serde(default)]
    pub platforms: Option<Vec<Platform>>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, deserialize_with = "present")]
    pub cover_image_url: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl GamePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the present fields to `record`.
    pub fn apply_to(self, record: &mut GameRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(released) = self.released {
            record.released = released;
        }
        if let Some(rating) = self.rating {
            record.rating = rating;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(developer) = self.developer {
            record.developer = developer;
        }
        if let Some(platforms) = self.platforms {
            record.platforms = platforms;
        }
        if let Some(genres) = self.genres {
            record.genres = genres;
        }
        if let Some(cover_image_url) = self.cover_image_url {
            record.cover_image_url = cover_image_url;
        }
    }
}

/// Filter for the combined local search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFilter {
    /// Case-insensitive substring of the name.
    pub name_contains: Option<String>,
    /// Inclusive lower rating bound. Unrated games never match a bound.
    pub min_rating: Option<f64>,
    /// Inclusive upper rating bound.
    pub max_rating: Option<f64>,
}

/// Outcome of a bulk insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkInsertResult {
    pub inserted: Vec<GameRecord>,
    pub errors: Vec<BulkInsertError>,
}

/// A draft that could not be inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkInsertError {
    pub name: String,
    pub error: String,
}

/// Errors for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Game not found: {0}")]
    NotFound(i64),

    #[error("Game '{0}' already exists")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
