use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::RequestId;
use crate::models::{AgeBucket, Game, GameId, Genre, Mood, PlayStyle};
use crate::services::recommendations::{self, FindOutcome, FindRequest};
use crate::services::selection::Phase;
use crate::services::SelectionState;

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct ChoiceOption<T> {
    pub value: T,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub moods: Vec<ChoiceOption<Mood>>,
    pub styles: Vec<ChoiceOption<PlayStyle>>,
    pub ages: Vec<ChoiceOption<AgeBucket>>,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub rating: f64,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            rating: game.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameDetailsResponse {
    pub id: GameId,
    pub name: String,
    pub rating: f64,
    pub genres: String,
    pub released: String,
    pub trailer_url: String,
    pub has_clip: bool,
    pub background_image: Option<String>,
}

impl From<&Game> for GameDetailsResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            rating: game.rating,
            genres: game.genre_list(),
            released: game.released_display(),
            trailer_url: game.trailer_url(),
            has_clip: game.clip.is_some(),
            background_image: game.background_image.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub phase: Phase,
    pub games: Vec<GameSummary>,
    pub selected: Option<GameDetailsResponse>,
    pub review: Option<String>,
}

impl SessionResponse {
    fn new(session_id: Uuid, state: &SelectionState) -> Self {
        Self {
            session_id,
            phase: state.phase(),
            games: state
                .results()
                .map(|results| results.iter().map(GameSummary::from).collect())
                .unwrap_or_default(),
            selected: state.selected_game().map(GameDetailsResponse::from),
            review: state.review().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindResponse {
    #[serde(flatten)]
    pub outcome: FindOutcome,
    pub session: SessionResponse,
}

#[derive(Debug, Deserialize)]
pub struct SelectGameRequest {
    pub game_id: GameId,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List the moods, play styles and release ages a search can use
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        moods: Mood::ALL
            .iter()
            .map(|mood| ChoiceOption {
                value: *mood,
                label: mood.label(),
                genres: Some(mood.genres().into_iter().collect()),
            })
            .collect(),
        styles: PlayStyle::ALL
            .iter()
            .map(|style| ChoiceOption {
                value: *style,
                label: style.label(),
                genres: Some(style.genres().into_iter().collect()),
            })
            .collect(),
        ages: AgeBucket::ALL
            .iter()
            .map(|age| ChoiceOption {
                value: *age,
                label: age.label(),
                genres: None,
            })
            .collect(),
    })
}

/// Start a new session
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.create_session().await;
    (StatusCode::CREATED, Json(SessionCreatedResponse { session_id }))
}

/// Current results, selection and review for a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let session = state.session(session_id).await?;
    let selection = session.lock().await;
    Ok(Json(SessionResponse::new(session_id, &selection)))
}

/// End a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.remove_session(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search the catalog and replace the session's results
pub async fn find_games(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<FindRequest>,
) -> AppResult<Json<FindResponse>> {
    let session = state.session(session_id).await?;
    let mut selection = session.lock().await;

    tracing::info!(
        request_id = %request_id,
        session_id = %session_id,
        "Processing find request"
    );

    let today = Local::now().date_naive();
    let outcome =
        recommendations::find_games(&mut selection, &state.aggregator, request, today).await;

    tracing::info!(
        request_id = %request_id,
        session_id = %session_id,
        status = ?outcome.status,
        games = outcome.game_count,
        warnings = outcome.warnings.len(),
        "Find completed"
    );

    Ok(Json(FindResponse {
        outcome,
        session: SessionResponse::new(session_id, &selection),
    }))
}

/// Highlight a different game from the current results
pub async fn select_game(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectGameRequest>,
) -> AppResult<Json<SessionResponse>> {
    let session = state.session(session_id).await?;
    let mut selection = session.lock().await;

    if selection.select_game(request.game_id)? {
        tracing::debug!(session_id = %session_id, game_id = %request.game_id, "Selection changed");
    }

    Ok(Json(SessionResponse::new(session_id, &selection)))
}

/// Generate a review for the selected game
pub async fn generate_review(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<ReviewResponse>> {
    let session = state.session(session_id).await?;
    let mut selection = session.lock().await;

    tracing::info!(
        request_id = %request_id,
        session_id = %session_id,
        "Processing review request"
    );

    let review = recommendations::generate_review(&mut selection, &state.reviewer).await?;
    Ok(Json(ReviewResponse { review }))
}
