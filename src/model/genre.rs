use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The fixed set of genres a video game can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    #[serde(rename = "RPG")]
    Rpg,
    Strategy,
    Simulation,
    Sport,
    Racing,
    Puzzle,
    Horror,
    Shooter,
    Platform,
    Arcade,
}

impl Genre {
    /// Every genre, in menu order.
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Rpg,
        Genre::Strategy,
        Genre::Simulation,
        Genre::Sport,
        Genre::Racing,
        Genre::Puzzle,
        Genre::Horror,
        Genre::Shooter,
        Genre::Platform,
        Genre::Arcade,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Rpg => "RPG",
            Genre::Strategy => "Strategy",
            Genre::Simulation => "Simulation",
            Genre::Sport => "Sport",
            Genre::Racing => "Racing",
            Genre::Puzzle => "Puzzle",
            Genre::Horror => "Horror",
            Genre::Shooter => "Shooter",
            Genre::Platform => "Platform",
            Genre::Arcade => "Arcade",
        }
    }

    /// The numbered list shown when the user has to pick a genre.
    pub fn menu() -> String {
        let mut menu = String::from("Genres:");
        for (i, genre) in Self::ALL.iter().enumerate() {
            menu.push_str(&format!("\n{}. {genre}", i + 1));
        }
        menu
    }

    /// Looks up a genre by its 1-based position in [`Genre::ALL`].
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                GameError::invalid(format!("genre choice must be between 1 and {}", Self::ALL.len()))
            })
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = GameError;

    /// Accepts a display name (any case) or a 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(index) = wanted.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::invalid(format!("unknown genre: {wanted:?}")))
    }
}
