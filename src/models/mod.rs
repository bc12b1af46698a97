use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod game;
pub mod preferences;

pub use game::{Game, GameId, ResultSet};
pub use preferences::{AgeBucket, Genre, Mood, PlayStyle};

/// Half-open release-date interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Display for DateRange {
    /// Formats the range the way the catalog's `dates` filter expects it
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

/// Parameters for one per-genre catalog lookup
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub genre: Genre,
    pub dates: DateRange,
}

/// A genre whose catalog lookup failed during a find action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreWarning {
    pub genre: Genre,
    pub message: String,
}

// ============================================================================
// RAWG API Types
// ============================================================================

/// One record from the `results` array of `GET /games`
#[derive(Debug, Clone, Deserialize)]
pub struct RawgGame {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genres: Option<Vec<RawgGenre>>,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub clip: Option<RawgClip>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawgGenre {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawgClip {
    #[serde(default)]
    pub clip: Option<String>,
}

impl From<RawgGame> for Game {
    fn from(rawg: RawgGame) -> Self {
        Game {
            id: GameId(rawg.id),
            name: rawg.name,
            rating: rawg.rating.unwrap_or_default(),
            genres: rawg
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|genre| genre.name)
                .collect(),
            released: rawg.released,
            background_image: rawg.background_image,
            clip: rawg.clip.and_then(|clip| clip.clip),
        }
    }
}

// ============================================================================
// Chat Completion API Types
// ============================================================================

/// A single-turn completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
