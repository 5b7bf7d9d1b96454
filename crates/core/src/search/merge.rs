//! Merge, filter, sort and page of search results.

use std::collections::HashMap;

use super::{GameSummary, SortOrder};

/// Concatenate `local` and `external`, keeping one entry per exact name.
///
/// A name keeps the position of its first occurrence and the value of its
/// last, so an external hit replaces a local record of the same name.
pub fn merge_results(local: Vec<GameSummary>, external: Vec<GameSummary>) -> Vec<GameSummary> {
    let mut merged: Vec<GameSummary> = Vec::with_capacity(local.len() + external.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for summary in local.into_iter().chain(external) {
        match positions.get(&summary.name) {
            Some(&index) => merged[index] = summary,
            None => {
                positions.insert(summary.name.clone(), merged.len());
                merged.push(summary);
            }
        }
    }

    merged
}

/// Keep results tagged with `genre` and available on `platform`.
pub fn apply_filters(
    results: Vec<GameSummary>,
    genre: Option<i64>,
    platform: Option<i64>,
) -> Vec<GameSummary> {
    results
        .into_iter()
        .filter(|s| genre.is_none_or(|id| s.genres.iter().any(|g| g.id == Some(id))))
        .filter(|s| platform.is_none_or(|id| s.platforms.iter().any(|p| p.id == id)))
        .collect()
}

/// Stable sort by `order`.
pub fn sort_results(results: &mut [GameSummary], order: SortOrder) {
    match order {
        SortOrder::Rating => results.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        }),
        SortOrder::Released => results.sort_by(|a, b| {
            b.released
                .as_deref()
                .unwrap_or("")
                .cmp(a.released.as_deref().unwrap_or(""))
        }),
        SortOrder::Name => results.sort_by_cached_key(|s| s.name.to_lowercase()),
    }
}

/// The `[offset, offset + limit)` window. Past the end is empty.
pub fn paginate(results: Vec<GameSummary>, offset: usize, limit: usize) -> Vec<GameSummary> {
    results.into_iter().skip(offset).take(limit).collect()
}
