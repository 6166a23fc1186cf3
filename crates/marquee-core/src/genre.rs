//! Genre index derived from the search history.
//!
//! The index is never stored; it is recomputed from the history each time
//! it is needed.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::MovieRecord;

/// Split a comma-separated genre field into trimmed, lowercased, non-empty
/// tokens.
pub fn genre_tokens(field: &str) -> impl Iterator<Item = String> + '_ {
    field
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
}

/// Every genre that appears in `history`, sorted and deduplicated.
pub fn unique_genres(history: &[MovieRecord]) -> BTreeSet<String> {
    history
        .iter()
        .flat_map(|record| genre_tokens(record.genre_field()))
        .collect()
}

/// Records whose genre list contains `genre` (trimmed, case-insensitive).
pub fn with_genre<'a>(history: &'a [MovieRecord], genre: &str) -> Vec<&'a MovieRecord> {
    let wanted = genre.trim().to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }

    history
        .iter()
        .filter(|record| genre_tokens(record.genre_field()).any(|g| g == wanted))
        .collect()
}

/// Pick a random record of the given genre using `rng`.
///
/// Returns `None` when no record in `history` has that genre.
pub fn recommend_with<'a, R>(
    history: &'a [MovieRecord],
    genre: &str,
    rng: &mut R,
) -> Option<&'a MovieRecord>
where
    R: Rng + ?Sized,
{
    with_genre(history, genre).choose(rng).copied()
}

/// Pick a random record of the given genre.
pub fn recommend<'a>(history: &'a [MovieRecord], genre: &str) -> Option<&'a MovieRecord> {
    recommend_with(history, genre, &mut rand::thread_rng())
}
