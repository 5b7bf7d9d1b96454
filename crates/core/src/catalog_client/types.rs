//! Types for RAWG API responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Full game record as returned by the RAWG detail endpoint.
///
/// Only the fields the catalog uses are kept. Every field is optional on the
/// wire; list fields also accept `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExternalGame {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub developers: Vec<ExternalDeveloper>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<ExternalPlatformEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<ExternalGenre>,
    #[serde(default)]
    pub background_image: Option<String>,
}

/// Developer credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExternalDeveloper {
    #[serde(default)]
    pub name: Option<String>,
}

/// Wrapper RAWG puts around each platform of a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExternalPlatformEntry {
    #[serde(default)]
    pub platform: Option<ExternalPlatform>,
}

/// Platform reference inside a game record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExternalPlatform {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Genre reference inside a game record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExternalGenre {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Genre or platform as listed by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
