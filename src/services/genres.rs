use std::collections::BTreeSet;

use crate::models::{Genre, Mood, PlayStyle};

/// Derives the catalog genres to query for a mood and play style
///
/// Genres shared by both are preferred. When the two have nothing in common the
/// union is used instead, so the result is never empty.
pub fn resolve_genres(mood: Mood, style: PlayStyle) -> BTreeSet<Genre> {
    let mood_genres = mood.genres();
    let style_genres = style.genres();

    let shared: BTreeSet<Genre> = mood_genres.intersection(&style_genres).cloned().collect();
    if !shared.is_empty() {
        return shared;
    }

    mood_genres.union(&style_genres).cloned().collect()
}
