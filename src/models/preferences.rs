use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display};

/// A genre tag understood by the game catalog (e.g. "rpg", "story-rich")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(String);

impl Genre {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn genre_set(tags: &[&str]) -> BTreeSet<Genre> {
    tags.iter().map(|tag| Genre::new(*tag)).collect()
}

/// How the player feels right now
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Relaxed,
    Energetic,
    Emotional,
    Tense,
    Thoughtful,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Relaxed,
        Mood::Energetic,
        Mood::Emotional,
        Mood::Tense,
        Mood::Thoughtful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Relaxed => "Relaxed",
            Mood::Energetic => "Energetic",
            Mood::Emotional => "Emotional",
            Mood::Tense => "Tense",
            Mood::Thoughtful => "Thoughtful",
        }
    }

    /// Catalog genres matching this mood. Never empty.
    pub fn genres(&self) -> BTreeSet<Genre> {
        match self {
            Mood::Relaxed => genre_set(&["indie", "adventure"]),
            Mood::Energetic => genre_set(&["shooter", "action"]),
            Mood::Emotional => genre_set(&["rpg", "adventure"]),
            Mood::Tense => genre_set(&["horror"]),
            Mood::Thoughtful => genre_set(&["puzzle", "strategy"]),
        }
    }
}

/// How the player likes to play
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    Casual,
    Competitive,
    Explorative,
    Strategic,
    StoryDriven,
    Social,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 6] = [
        PlayStyle::Casual,
        PlayStyle::Competitive,
        PlayStyle::Explorative,
        PlayStyle::Strategic,
        PlayStyle::StoryDriven,
        PlayStyle::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayStyle::Casual => "Casual",
            PlayStyle::Competitive => "Competitive",
            PlayStyle::Explorative => "Explorative",
            PlayStyle::Strategic => "Strategic",
            PlayStyle::StoryDriven => "Story-driven",
            PlayStyle::Social => "Social",
        }
    }

    /// Catalog genres matching this play style. Never empty.
    pub fn genres(&self) -> BTreeSet<Genre> {
        match self {
            PlayStyle::Casual => genre_set(&["puzzle", "indie", "simulation"]),
            PlayStyle::Competitive => genre_set(&["shooter", "fighting", "moba"]),
            PlayStyle::Explorative => genre_set(&["rpg", "adventure"]),
            PlayStyle::Strategic => genre_set(&["strategy", "turn-based", "card"]),
            PlayStyle::StoryDriven => genre_set(&["rpg", "story-rich", "adventure"]),
            PlayStyle::Social => genre_set(&["mmo", "co-op", "party"]),
        }
    }
}

/// Release-age filter, relative to today
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    /// Less than a year old
    New,
    /// One to five years old
    Recent,
    /// Five to ten years old
    Aged,
    /// More than ten years old
    Older,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 4] = [
        AgeBucket::New,
        AgeBucket::Recent,
        AgeBucket::Aged,
        AgeBucket::Older,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::New => "New (< 1 year old)",
            AgeBucket::Recent => "Recent (1-5 years old)",
            AgeBucket::Aged => "Aged (5-10 years old)",
            AgeBucket::Older => "Older (> 10 years old)",
        }
    }
}
