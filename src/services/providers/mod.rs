/// External data providers
///
/// The recommender talks to two outside services: a game catalog that answers per-genre
/// lookups, and a chat completion service that writes reviews. Each sits behind a trait so
/// the aggregation and review logic can be exercised without network access.
use crate::{
    error::AppResult,
    models::{CatalogQuery, CompletionRequest, Game},
};

pub mod openai;
pub mod rawg;

pub use openai::OpenAiCompletionProvider;
pub use rawg::RawgCatalog;

/// Trait for game catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GameCatalog: Send + Sync {
    /// Fetch one page of games for a single genre within a release window
    ///
    /// Non-success responses and transport failures are errors; an empty page is not.
    async fn fetch_games(&self, query: &CatalogQuery) -> AppResult<Vec<Game>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for single-turn text completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the text of the first choice
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String>;

    fn name(&self) -> &'static str;
}
