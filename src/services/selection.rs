use serde::Serialize;

use crate::models::{Game, GameId, ResultSet};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("No games to choose from; run a search first")]
    NoResults,

    #[error("Game {0} is not in the current results")]
    UnknownGame(GameId),
}

/// Coarse phase of a session, for clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Empty,
    ResultsEmpty,
    Populated,
}

/// The highlighted game and the review written for it
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub game_id: GameId,
    pub review: String,
}

/// Per-session recommendation state
///
/// Transitions never perform I/O. Callers fetch games or generate review text first and
/// hand the result in, so every transition can be driven directly from tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    /// Nothing searched yet
    #[default]
    Empty,
    /// A search ran and found nothing
    ResultsEmpty,
    /// A search found games; one of them is always selected
    Populated {
        results: ResultSet,
        selection: Selection,
    },
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self {
            SelectionState::Empty => Phase::Empty,
            SelectionState::ResultsEmpty => Phase::ResultsEmpty,
            SelectionState::Populated { .. } => Phase::Populated,
        }
    }

    /// Replaces everything with a fresh result set
    ///
    /// The first game becomes the selection and the review starts empty. Whatever was
    /// held before is dropped, whatever state the session was in.
    pub fn replace_results(&mut self, results: ResultSet) {
        *self = match results.first().map(|game| game.id) {
            Some(game_id) => SelectionState::Populated {
                results,
                selection: Selection {
                    game_id,
                    review: String::new(),
                },
            },
            None => SelectionState::ResultsEmpty,
        };
    }

    /// Points the selection at another game
    ///
    /// Returns whether anything changed. Re-selecting the current game keeps its review.
    pub fn select_game(&mut self, id: GameId) -> Result<bool, SelectionError> {
        let SelectionState::Populated { results, selection } = self else {
            return Err(SelectionError::NoResults);
        };

        if !results.contains(id) {
            return Err(SelectionError::UnknownGame(id));
        }
        if selection.game_id == id {
            return Ok(false);
        }

        selection.game_id = id;
        selection.review.clear();
        Ok(true)
    }

    /// Stores review text for the current selection, replacing any earlier review
    pub fn set_review(&mut self, review: String) -> Result<(), SelectionError> {
        match self {
            SelectionState::Populated { selection, .. } => {
                selection.review = review;
                Ok(())
            }
            _ => Err(SelectionError::NoResults),
        }
    }

    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            SelectionState::Populated { results, .. } => Some(results),
            _ => None,
        }
    }

    pub fn selected_game(&self) -> Option<&Game> {
        match self {
            SelectionState::Populated { results, selection } => results.get(selection.game_id),
            _ => None,
        }
    }

    /// Review text for the current selection; empty when none has been written
    pub fn review(&self) -> Option<&str> {
        match self {
            SelectionState::Populated { selection, .. } => Some(&selection.review),
            _ => None,
        }
    }
}
