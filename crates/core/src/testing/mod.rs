//! Testing utilities and mock implementations.
//!
//! [`MockExternalCatalog`] stands in for RAWG so that searches and imports
//! can be exercised without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use revalis_core::testing::{fixtures, MockExternalCatalog};
//!
//! let catalog = MockExternalCatalog::new();
//! catalog.add_game(fixtures::external_game(3498, "Grand Theft Auto V")).await;
//!
//! // Use in AppState...
//! ```

mod mock_external_catalog;

pub use mock_external_catalog::{MockExternalCatalog, RecordedSearch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog_client::{
        CatalogEntry, ExternalDeveloper, ExternalGame, ExternalGenre, ExternalPlatform,
        ExternalPlatformEntry,
    };
    use crate::store::{GameDraft, Genre, Platform};

    /// Create an external game with only an id and a name.
    pub fn external_game(id: i64, name: &str) -> ExternalGame {
        ExternalGame {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Create a fully populated external game.
    pub fn detailed_external_game(id: i64, name: &str) -> ExternalGame {
        ExternalGame {
            id,
            name: name.to_string(),
            released: Some("2015-05-18".to_string()),
            rating: Some(4.6),
            description_raw: Some(format!("{} is a game.", name)),
            developers: vec![ExternalDeveloper {
                name: Some("CD PROJEKT RED".to_string()),
            }],
            platforms: vec![
                ExternalPlatformEntry {
                    platform: Some(ExternalPlatform {
                        id: Some(4),
                        name: Some("PC".to_string()),
                    }),
                },
                ExternalPlatformEntry {
                    platform: Some(ExternalPlatform {
                        id: Some(18),
                        name: Some("PlayStation 4".to_string()),
                    }),
                },
            ],
            genres: vec![ExternalGenre {
                id: Some(5),
                name: Some("RPG".to_string()),
            }],
            background_image: Some(format!("https://media.rawg.io/media/games/{}.jpg", id)),
        }
    }

    /// Create a draft with a rating, one platform and one genre.
    pub fn game_draft(name: &str, rating: Option<f64>) -> GameDraft {
        GameDraft {
            released: Some("2020-01-01".to_string()),
            rating,
            developer: Some("Test Studio".to_string()),
            platforms: vec![Platform {
                id: 4,
                name: "PC".to_string(),
                icon: Some("pc.png".to_string()),
            }],
            genres: vec![Genre {
                id: Some(4),
                name: Some("Action".to_string()),
            }],
            ..GameDraft::named(name)
        }
    }

    /// Create a genre or platform listing entry.
    pub fn catalog_entry(id: i64, name: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
        }
    }
}
