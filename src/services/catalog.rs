use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;

use crate::{
    error::AppError,
    models::{CatalogQuery, DateRange, Game, Genre, GenreWarning, ResultSet},
    services::providers::GameCatalog,
};

/// How a find action turned out, as far as the catalog is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationStatus {
    /// At least one game came back
    Found,
    /// Lookups answered, but nothing matched
    NoResults,
    /// Every genre lookup failed
    FetchFailed,
}

/// Merged outcome of one fan-out across genres
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub games: ResultSet,
    pub warnings: Vec<GenreWarning>,
    pub genres_queried: usize,
}

impl Aggregation {
    pub fn status(&self) -> AggregationStatus {
        if !self.games.is_empty() {
            AggregationStatus::Found
        } else if self.genres_queried > 0 && self.warnings.len() == self.genres_queried {
            AggregationStatus::FetchFailed
        } else {
            AggregationStatus::NoResults
        }
    }
}

/// Fans a find action out to the catalog, one lookup per genre
#[derive(Clone)]
pub struct CatalogAggregator {
    catalog: Arc<dyn GameCatalog>,
}

impl CatalogAggregator {
    pub fn new(catalog: Arc<dyn GameCatalog>) -> Self {
        Self { catalog }
    }

    /// Queries every genre concurrently and merges what comes back
    ///
    /// A failed genre contributes nothing and is reported as a warning; the other genres
    /// are unaffected. Batches are merged in genre order regardless of which lookup
    /// finishes first.
    pub async fn aggregate(&self, genres: &BTreeSet<Genre>, dates: DateRange) -> Aggregation {
        tracing::info!(
            genre_count = genres.len(),
            dates = %dates,
            provider = self.catalog.name(),
            "Fetching games by genre"
        );

        let mut tasks = Vec::new();

        for genre in genres {
            let catalog = Arc::clone(&self.catalog);
            let query = CatalogQuery {
                genre: genre.clone(),
                dates,
            };
            let task = tokio::spawn(async move { catalog.fetch_games(&query).await });
            tasks.push((genre.clone(), task));
        }

        let mut batches: Vec<Vec<Game>> = Vec::new();
        let mut warnings = Vec::new();

        for (genre, task) in tasks {
            let outcome = match task.await {
                Ok(result) => result,
                Err(e) => Err(AppError::Internal(e.to_string())),
            };

            match outcome {
                Ok(games) => batches.push(games),
                Err(e) => {
                    tracing::warn!(genre = %genre, error = %e, "Genre lookup failed");
                    warnings.push(GenreWarning {
                        message: format!("Failed to load games for genre: {}", genre),
                        genre,
                    });
                }
            }
        }

        let games = ResultSet::merge(batches);

        if !warnings.is_empty() {
            tracing::warn!(
                success_count = genres.len() - warnings.len(),
                error_count = warnings.len(),
                "Partial genre fetch failure"
            );
        }

        tracing::info!(unique_games = games.len(), "Games merged");

        Aggregation {
            games,
            warnings,
            genres_queried: genres.len(),
        }
    }
}
