use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{AgeBucket, DateRange, Genre, GenreWarning, Mood, PlayStyle},
    services::{
        catalog::{AggregationStatus, CatalogAggregator},
        genres::resolve_genres,
        release_dates::resolve_date_range,
        review::ReviewGenerator,
        selection::{SelectionError, SelectionState},
    },
};

/// What the player asked for
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct FindRequest {
    pub mood: Mood,
    pub style: PlayStyle,
    pub age: AgeBucket,
}

/// Summary of a find action
#[derive(Debug, Clone, Serialize)]
pub struct FindOutcome {
    pub genres: Vec<Genre>,
    pub dates: DateRange,
    pub status: AggregationStatus,
    pub game_count: usize,
    pub warnings: Vec<GenreWarning>,
}

/// Runs a search and installs the results in `state`
///
/// The catalog is consulted first; `state` is only touched once every genre lookup has
/// settled.
pub async fn find_games(
    state: &mut SelectionState,
    aggregator: &CatalogAggregator,
    request: FindRequest,
    today: NaiveDate,
) -> FindOutcome {
    let genres = resolve_genres(request.mood, request.style);
    let dates = resolve_date_range(request.age, today);

    tracing::info!(
        mood = request.mood.label(),
        style = request.style.label(),
        age = request.age.label(),
        genres = ?genres,
        "Finding games"
    );

    let aggregation = aggregator.aggregate(&genres, dates).await;
    let status = aggregation.status();
    let game_count = aggregation.games.len();

    state.replace_results(aggregation.games);

    FindOutcome {
        genres: genres.into_iter().collect(),
        dates,
        status,
        game_count,
        warnings: aggregation.warnings,
    }
}

/// Writes a review for the selected game and stores it in `state`
///
/// Completion failures are not errors here: their message becomes the review. The only
/// error is having nothing selected.
pub async fn generate_review(
    state: &mut SelectionState,
    reviewer: &ReviewGenerator,
) -> AppResult<String> {
    let game = state
        .selected_game()
        .cloned()
        .ok_or(SelectionError::NoResults)?;

    let review = reviewer.generate(&game).await;
    state.set_review(review.clone())?;

    Ok(review)
}
