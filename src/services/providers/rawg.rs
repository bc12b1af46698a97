/// RAWG video game database provider
///
/// Looks games up through `GET /games`, one genre per call, best rated first.
use crate::{
    error::{AppError, AppResult},
    models::{CatalogQuery, Game, RawgGame},
    services::providers::GameCatalog,
};
use reqwest::Client as HttpClient;

/// Games requested per genre. Only the first page is ever fetched.
pub const PAGE_SIZE: u32 = 100;
/// Highest rating first
const ORDERING: &str = "-rating";

#[derive(Clone)]
pub struct RawgCatalog {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl RawgCatalog {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Query string for one lookup. The key is left out when none is configured.
    fn query_params(&self, query: &CatalogQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("genres", query.genre.to_string()),
            ("ordering", ORDERING.to_string()),
            ("page_size", PAGE_SIZE.to_string()),
            ("dates", query.dates.to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }

    /// Pulls games out of a response body, skipping records that don't parse
    fn parse_results(&self, body: serde_json::Value) -> AppResult<Vec<Game>> {
        let results = body["results"].as_array().ok_or_else(|| {
            AppError::ExternalApi("Invalid RAWG response format".to_string())
        })?;

        let games = results
            .iter()
            .filter_map(|record| match serde_json::from_value::<RawgGame>(record.clone()) {
                Ok(rawg) => Some(Game::from(rawg)),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed RAWG record");
                    None
                }
            })
            .collect();

        Ok(games)
    }
}

#[async_trait::async_trait]
impl GameCatalog for RawgCatalog {
    async fn fetch_games(&self, query: &CatalogQuery) -> AppResult<Vec<Game>> {
        let url = format!("{}/games", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&self.query_params(query))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "RAWG API returned status {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let games = self.parse_results(body)?;

        tracing::info!(
            genre = %query.genre,
            dates = %query.dates,
            results = games.len(),
            provider = "rawg",
            "Genre lookup completed"
        );

        Ok(games)
    }

    fn name(&self) -> &'static str {
        "rawg"
    }
}
