use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

/// Catalog-assigned game identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A game as returned by the catalog. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub rating: f64,
    pub genres: Vec<String>,
    pub released: Option<NaiveDate>,
    pub background_image: Option<String>,
    pub clip: Option<String>,
}

impl Game {
    /// Genre names joined for display and prompts
    pub fn genre_list(&self) -> String {
        self.genres.join(", ")
    }

    /// Release date in long form ("March 04, 2022"), or "N/A"
    pub fn released_display(&self) -> String {
        self.released
            .map(|date| date.format("%B %d, %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// The catalog clip when there is one, otherwise a YouTube trailer search
    pub fn trailer_url(&self) -> String {
        match &self.clip {
            Some(clip) => clip.clone(),
            None => format!(
                "https://www.youtube.com/results?search_query={}+trailer",
                self.name.replace(' ', "+")
            ),
        }
    }
}

/// Deduplicated games produced by one find action
///
/// Each id appears once, at the position where it was first seen. When the same id
/// shows up again the later record replaces the earlier one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<Game>);

impl ResultSet {
    /// Merges per-genre batches in the order given
    pub fn merge<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<Game>>,
    {
        let mut games: Vec<Game> = Vec::new();
        let mut positions: HashMap<GameId, usize> = HashMap::new();

        for game in batches.into_iter().flatten() {
            match positions.get(&game.id) {
                Some(&index) => games[index] = game,
                None => {
                    positions.insert(game.id, games.len());
                    games.push(game);
                }
            }
        }

        Self(games)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Game> {
        self.0.first()
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.0.iter().find(|game| game.id == id)
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.0.iter()
    }
}

impl From<Vec<Game>> for ResultSet {
    fn from(games: Vec<Game>) -> Self {
        Self::merge([games])
    }
}
