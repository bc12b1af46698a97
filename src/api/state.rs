use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::providers::{CompletionProvider, GameCatalog};
use crate::services::{CatalogAggregator, ReviewGenerator, SelectionState};

/// One session's state. The mutex makes actions on a session run one at a time.
pub type SessionHandle = Arc<Mutex<SelectionState>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub aggregator: CatalogAggregator,
    pub reviewer: ReviewGenerator,
}

/// Live sessions, in memory only
pub struct AppStateInner {
    pub sessions: HashMap<Uuid, SessionHandle>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn GameCatalog>, completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                sessions: HashMap::new(),
            })),
            aggregator: CatalogAggregator::new(catalog),
            reviewer: ReviewGenerator::new(completion),
        }
    }

    /// Opens a session in the `Empty` state
    pub async fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut inner = self.inner.write().await;
        inner
            .sessions
            .insert(id, Arc::new(Mutex::new(SelectionState::new())));
        tracing::info!(session_id = %id, active_sessions = inner.sessions.len(), "Session created");
        id
    }

    pub async fn session(&self, id: Uuid) -> AppResult<SessionHandle> {
        let inner = self.inner.read().await;
        inner
            .sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))
    }

    pub async fn remove_session(&self, id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .sessions
            .remove(&id)
            .map(|_| tracing::info!(session_id = %id, "Session closed"))
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))
    }
}
