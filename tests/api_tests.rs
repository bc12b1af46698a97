use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use playmood_api::api::{create_router, AppState};
use playmood_api::error::{AppError, AppResult};
use playmood_api::models::{CatalogQuery, CompletionRequest, Game, GameId};
use playmood_api::services::providers::{CompletionProvider, GameCatalog};

/// Catalog that answers from a fixed table; unknown genres return nothing
#[derive(Default)]
struct FakeCatalog {
    answers: HashMap<&'static str, Result<Vec<Game>, String>>,
}

impl FakeCatalog {
    fn with(mut self, genre: &'static str, answer: Result<Vec<Game>, &str>) -> Self {
        self.answers.insert(genre, answer.map_err(str::to_string));
        self
    }
}

#[async_trait::async_trait]
impl GameCatalog for FakeCatalog {
    async fn fetch_games(&self, query: &CatalogQuery) -> AppResult<Vec<Game>> {
        match self.answers.get(query.genre.as_str()) {
            Some(Ok(games)) => Ok(games.clone()),
            Some(Err(msg)) => Err(AppError::ExternalApi(msg.clone())),
            None => Ok(vec![]),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

struct FakeCompletion {
    answer: Result<String, String>,
}

impl FakeCompletion {
    fn replying(text: &str) -> Self {
        Self {
            answer: Ok(text.to_string()),
        }
    }

    fn failing(msg: &str) -> Self {
        Self {
            answer: Err(msg.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for FakeCompletion {
    async fn complete(&self, _request: &CompletionRequest) -> AppResult<String> {
        self.answer.clone().map_err(AppError::ExternalApi)
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn game(id: u64, name: &str, rating: f64) -> Game {
    Game {
        id: GameId(id),
        name: name.to_string(),
        rating,
        genres: vec!["Action".to_string(), "Shooter".to_string()],
        released: chrono::NaiveDate::from_ymd_opt(2023, 3, 24),
        background_image: Some(format!("https://media.rawg.io/{}.jpg", id)),
        clip: None,
    }
}

fn shooter_catalog() -> FakeCatalog {
    FakeCatalog::default()
        .with("horror", Err("RAWG API returned status 502 Bad Gateway"))
        .with(
            "shooter",
            Ok(vec![game(42, "DOOM Eternal", 4.4), game(7, "Titanfall 2", 4.5)]),
        )
        .with(
            "fighting",
            Ok(vec![game(42, "DOOM Eternal", 4.4), game(11, "Tekken 8", 4.1)]),
        )
}

fn create_test_server(catalog: FakeCatalog, completion: FakeCompletion) -> TestServer {
    let state = AppState::new(Arc::new(catalog), Arc::new(completion));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn new_session(server: &TestServer) -> String {
    let response = server.post("/api/v1/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["session_id"].as_str().unwrap().to_string()
}

async fn find_tense_competitive(server: &TestServer, session_id: &str) -> Value {
    let response = server
        .post(&format!("/api/v1/sessions/{}/find", session_id))
        .json(&json!({
            "mood": "tense",
            "style": "competitive",
            "age": "recent"
        }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let response = server.get("/health").await;
    let header = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_options_lists_every_choice() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));

    let response = server.get("/api/v1/options").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["moods"].as_array().unwrap().len(), 5);
    assert_eq!(body["styles"].as_array().unwrap().len(), 6);
    assert_eq!(body["ages"].as_array().unwrap().len(), 4);
    assert_eq!(body["styles"][4]["value"], "story_driven");
    assert_eq!(body["styles"][4]["label"], "Story-driven");
    assert_eq!(body["ages"][0]["label"], "New (< 1 year old)");
    assert_eq!(body["moods"][3]["genres"], json!(["horror"]));
}

#[tokio::test]
async fn test_new_session_starts_empty() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let session_id = new_session(&server).await;

    let response = server.get(&format!("/api/v1/sessions/{}", session_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["phase"], "empty");
    assert_eq!(body["games"], json!([]));
    assert!(body["selected"].is_null());
}

#[tokio::test]
async fn test_unknown_session() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let response = server
        .get(&format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_find_merges_genres_and_reports_failures() {
    let server = create_test_server(shooter_catalog(), FakeCompletion::replying(""));
    let session_id = new_session(&server).await;

    let body = find_tense_competitive(&server, &session_id).await;

    assert_eq!(body["genres"], json!(["fighting", "horror", "moba", "shooter"]));
    assert_eq!(body["status"], "found");
    assert_eq!(body["game_count"], 3);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
    assert_eq!(body["warnings"][0]["genre"], "horror");

    let games = body["session"]["games"].as_array().unwrap();
    let ids: Vec<u64> = games.iter().map(|g| g["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![42, 11, 7]);

    assert_eq!(body["session"]["phase"], "populated");
    assert_eq!(body["session"]["selected"]["id"], 42);
    assert_eq!(body["session"]["selected"]["released"], "March 24, 2023");
    assert_eq!(
        body["session"]["selected"]["trailer_url"],
        "https://www.youtube.com/results?search_query=DOOM+Eternal+trailer"
    );
    assert_eq!(body["session"]["review"], "");
}

#[tokio::test]
async fn test_find_with_nothing_found() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let session_id = new_session(&server).await;

    let body = find_tense_competitive(&server, &session_id).await;

    assert_eq!(body["status"], "no_results");
    assert_eq!(body["session"]["phase"], "results_empty");
    assert!(body["session"]["selected"].is_null());
}

#[tokio::test]
async fn test_find_with_every_genre_failing() {
    let catalog = ["horror", "shooter", "fighting", "moba"]
        .into_iter()
        .fold(FakeCatalog::default(), |c, g| c.with(g, Err("401 Unauthorized")));
    let server = create_test_server(catalog, FakeCompletion::replying(""));
    let session_id = new_session(&server).await;

    let body = find_tense_competitive(&server, &session_id).await;

    assert_eq!(body["status"], "fetch_failed");
    assert_eq!(body["warnings"].as_array().unwrap().len(), 4);
    assert_eq!(body["session"]["phase"], "results_empty");
}

#[tokio::test]
async fn test_select_and_review_flow() {
    let server = create_test_server(
        shooter_catalog(),
        FakeCompletion::replying("Fast, loud and precise."),
    );
    let session_id = new_session(&server).await;
    find_tense_competitive(&server, &session_id).await;

    let review_path = format!("/api/v1/sessions/{}/review", session_id);
    let selection_path = format!("/api/v1/sessions/{}/selection", session_id);

    let response = server.post(&review_path).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["review"], "Fast, loud and precise.");

    // Re-selecting the current game keeps its review
    let response = server.put(&selection_path).json(&json!({ "game_id": 42 })).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["review"], "Fast, loud and precise.");

    // Switching games clears it
    let response = server.put(&selection_path).json(&json!({ "game_id": 7 })).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["selected"]["name"], "Titanfall 2");
    assert_eq!(body["review"], "");
}

#[tokio::test]
async fn test_review_failure_is_shown_as_review() {
    let server = create_test_server(
        shooter_catalog(),
        FakeCompletion::failing("error sending request: connection refused"),
    );
    let session_id = new_session(&server).await;
    find_tense_competitive(&server, &session_id).await;

    let response = server
        .post(&format!("/api/v1/sessions/{}/review", session_id))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let review = body["review"].as_str().unwrap();
    assert!(review.starts_with("Error generating review:"));
    assert!(review.contains("connection refused"));

    let response = server.get(&format!("/api/v1/sessions/{}", session_id)).await;
    let body: Value = response.json();
    assert_eq!(body["phase"], "populated");
    assert_eq!(body["review"], review);
}

#[tokio::test]
async fn test_select_unknown_game() {
    let server = create_test_server(shooter_catalog(), FakeCompletion::replying(""));
    let session_id = new_session(&server).await;
    find_tense_competitive(&server, &session_id).await;

    let response = server
        .put(&format!("/api/v1/sessions/{}/selection", session_id))
        .json(&json!({ "game_id": 999 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actions_before_find_conflict() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying("unused"));
    let session_id = new_session(&server).await;

    let response = server
        .post(&format!("/api/v1/sessions/{}/review", session_id))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let response = server
        .put(&format!("/api/v1/sessions/{}/selection", session_id))
        .json(&json!({ "game_id": 1 }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_mood_is_rejected() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let session_id = new_session(&server).await;

    let response = server
        .post(&format!("/api/v1/sessions/{}/find", session_id))
        .json(&json!({ "mood": "sleepy", "style": "casual", "age": "new" }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_delete_session() {
    let server = create_test_server(FakeCatalog::default(), FakeCompletion::replying(""));
    let session_id = new_session(&server).await;
    let path = format!("/api/v1/sessions/{}", session_id);

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}
