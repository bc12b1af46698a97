use std::sync::Arc;

use crate::{
    models::{CompletionRequest, Game},
    services::providers::CompletionProvider,
};

pub const REVIEW_MODEL: &str = "gpt-4.1-nano";
pub const REVIEW_MAX_TOKENS: u32 = 150;
pub const REVIEW_TEMPERATURE: f32 = 0.7;

/// Writes a short "why this game" blurb for a recommended game
#[derive(Clone)]
pub struct ReviewGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ReviewGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn prompt_for(game: &Game) -> String {
        format!(
            "Provide a short review and explain why the game '{}' with genres {} and rating {} is recommended for players.",
            game.name,
            game.genre_list(),
            game.rating
        )
    }

    /// Always returns text. A failed completion comes back as a message naming the error.
    pub async fn generate(&self, game: &Game) -> String {
        let request = CompletionRequest {
            model: REVIEW_MODEL.to_string(),
            prompt: Self::prompt_for(game),
            max_tokens: REVIEW_MAX_TOKENS,
            temperature: REVIEW_TEMPERATURE,
        };

        match self.provider.complete(&request).await {
            Ok(text) => {
                tracing::info!(game_id = %game.id, provider = self.provider.name(), "Review generated");
                text
            }
            Err(e) => {
                tracing::warn!(game_id = %game.id, error = %e, "Review generation failed");
                format!("Error generating review: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::GameId;
    use crate::services::providers::MockCompletionProvider;

    fn hades() -> Game {
        Game {
            id: GameId(274755),
            name: "Hades".to_string(),
            rating: 4.45,
            genres: vec!["Action".to_string(), "Indie".to_string()],
            released: None,
            background_image: None,
            clip: None,
        }
    }

    #[test]
    fn test_prompt_embeds_game_details() {
        assert_eq!(
            ReviewGenerator::prompt_for(&hades()),
            "Provide a short review and explain why the game 'Hades' with genres Action, Indie \
             and rating 4.45 is recommended for players."
        );
    }

    #[tokio::test]
    async fn test_request_uses_fixed_parameters() {
        let mut mock = MockCompletionProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .withf(|request| {
                request.model == "gpt-4.1-nano"
                    && request.max_tokens == 150
                    && (request.temperature - 0.7).abs() < f32::EPSILON
                    && request.prompt.contains("'Hades'")
            })
            .times(1)
            .returning(|_| Ok("Tight combat and a great story.".to_string()));

        let text = ReviewGenerator::new(Arc::new(mock)).generate(&hades()).await;
        assert_eq!(text, "Tight combat and a great story.");
    }

    #[tokio::test]
    async fn test_failure_becomes_review_text() {
        let mut mock = MockCompletionProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .returning(|_| Err(AppError::ExternalApi("connection reset by peer".to_string())));

        let text = ReviewGenerator::new(Arc::new(mock)).generate(&hades()).await;

        assert!(text.starts_with("Error generating review:"));
        assert!(text.contains("connection reset by peer"));
    }
}
