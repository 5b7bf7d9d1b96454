//! Mapping of RAWG payloads onto the search result shape.

use super::GameSummary;
use crate::catalog_client::ExternalGame;
use crate::store::{Genre, Platform};

/// Icon used when a platform name matches no known family.
pub const DEFAULT_ICON: &str = "default.png";

/// Platform families, checked in order. The first family with a keyword
/// contained in the lower-cased name wins.
const ICON_RULES: &[(&[&str], &str)] = &[
    (&["pc", "windows", "steam"], "pc.png"),
    (&["xbox"], "xbox.png"),
    (&["playstation", "ps"], "playstation.png"),
    (&["switch", "nintendo"], "switch.png"),
    (&["android"], "android.png"),
    (&["ios"], "ios.png"),
    (&["macos", "mac", "apple"], "macos.png"),
];

/// Icon file for a platform name. Absent or empty names get no icon.
pub fn resolve_platform_icon(name: Option<&str>) -> Option<String> {
    let name = name.filter(|n| !n.is_empty())?.to_lowercase();

    let icon = ICON_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON);

    Some(icon.to_string())
}

/// Map a RAWG detail payload onto a search result.
pub fn from_external(game: ExternalGame) -> GameSummary {
    let platforms = game
        .platforms
        .into_iter()
        .filter_map(|entry| entry.platform)
        .map(|platform| Platform {
            icon: resolve_platform_icon(platform.name.as_deref()),
            id: platform.id.unwrap_or(0),
            name: platform.name.unwrap_or_default(),
        })
        .collect();

    let genres = game
        .genres
        .into_iter()
        .filter(|genre| genre.name.as_deref().is_some_and(|n| !n.is_empty()))
        .map(|genre| Genre {
            id: Some(genre.id.unwrap_or(0)),
            name: genre.name,
        })
        .collect();

    GameSummary {
        id: game.id,
        name: game.name,
        released: game.released,
        rating: game.rating,
        description: non_empty(game.description_raw),
        developer: game.developers.into_iter().next().and_then(|d| d.name),
        platforms,
        genres,
        cover_image_url: non_empty(game.background_image),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
