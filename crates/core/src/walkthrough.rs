//! Walkthrough link suggestions.
//!
//! Links are built from a slug of the game name. Nothing is fetched, so a
//! suggested page may not exist.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid slug pattern"));

/// Guide sites, in the order suggestions are returned.
const SOURCES: [(&str, &str, &str); 4] = [
    ("IGN", "https://www.ign.com/wikis/", ""),
    ("Neoseeker", "https://www.neoseeker.com/", "/"),
    (
        "TrueAchievements",
        "https://www.trueachievements.com/game/",
        "/walkthrough",
    ),
    ("GameSpot", "https://www.gamespot.com/games/", "/guides/"),
];

/// A link to a walkthrough on a guide site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalkthroughSuggestion {
    pub source: String,
    pub url: String,
}

/// Lower-case the name, turn spaces into hyphens and drop every other
/// character outside `[a-z0-9-]`.
pub fn slugify(name: &str) -> String {
    let hyphenated = name.to_lowercase().replace(' ', "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}

/// One suggestion per guide site, always in the same order.
pub fn suggest_walkthroughs(name: &str) -> Vec<WalkthroughSuggestion> {
    let slug = slugify(name);

    SOURCES
        .iter()
        .map(|(source, prefix, suffix)| WalkthroughSuggestion {
            source: (*source).to_string(),
            url: format!("{}{}{}", prefix, slug, suffix),
        })
        .collect()
}
