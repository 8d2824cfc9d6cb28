//! The [`Game`] sum type and the fields every game shares.

use super::{BoardGame, VideoGame};
use crate::error::GameError;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

pub const MIN_RELEASE_YEAR: i32 = 1950;
pub const MAX_RELEASE_YEAR: i32 = 2024;

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn non_blank(field: &str, value: &str) -> Result<String, GameError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GameError::invalid(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn positive(field: &str, value: i32) -> Result<i32, GameError> {
    if value <= 0 {
        return Err(GameError::invalid(format!("{field} must be positive, got {value}")));
    }
    Ok(value)
}

pub(crate) fn in_range(field: &str, value: i32, min: i32, max: i32) -> Result<i32, GameError> {
    if !(min..=max).contains(&value) {
        return Err(GameError::invalid(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(value)
}

fn valid_price(price: f64) -> Result<f64, GameError> {
    // NaN fails the comparison too.
    if !(price > 0.0 && price.is_finite()) {
        return Err(GameError::invalid(format!("price must be positive, got {price}")));
    }
    Ok(price)
}

/// Fields common to every kind of game.
///
/// All fields are private; setters re-run the same checks as [`GameInfo::new`] and
/// leave the value untouched when they fail. The id has no setter.
#[derive(Debug, Clone)]
pub struct GameInfo {
    id: String,
    title: String,
    release_year: i32,
    price: f64,
}

impl GameInfo {
    /// Validates and builds the shared fields. `id` and `title` are stored trimmed.
    pub fn new(id: &str, title: &str, release_year: i32, price: f64) -> Result<Self, GameError> {
        Ok(Self {
            id: non_blank("id", id)?,
            title: non_blank("title", title)?,
            release_year: in_range("release year", release_year, MIN_RELEASE_YEAR, MAX_RELEASE_YEAR)?,
            price: valid_price(price)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn id_string(&self) -> &String {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), GameError> {
        self.title = non_blank("title", title)?;
        Ok(())
    }

    pub fn set_release_year(&mut self, release_year: i32) -> Result<(), GameError> {
        self.release_year =
            in_range("release year", release_year, MIN_RELEASE_YEAR, MAX_RELEASE_YEAR)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), GameError> {
        self.price = valid_price(price)?;
        Ok(())
    }
}

impl Display for GameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Year: {}, Price: €{:.2}",
            self.id, self.title, self.release_year, self.price
        )
    }
}

/// A game in the collection: either a video game or a board game.
///
/// Two games are equal when their ids are equal, whatever their other fields hold.
#[derive(Debug, Clone)]
pub enum Game {
    Video(VideoGame),
    Board(BoardGame),
}

impl Game {
    pub fn info(&self) -> &GameInfo {
        match self {
            Game::Video(game) => game.info(),
            Game::Board(game) => game.info(),
        }
    }

    pub fn info_mut(&mut self) -> &mut GameInfo {
        match self {
            Game::Video(game) => game.info_mut(),
            Game::Board(game) => game.info_mut(),
        }
    }

    pub fn id(&self) -> &str {
        self.info().id()
    }

    pub fn title(&self) -> &str {
        self.info().title()
    }

    pub fn release_year(&self) -> i32 {
        self.info().release_year()
    }

    pub fn price(&self) -> f64 {
        self.info().price()
    }

    /// Display name of the variant: "Video Game" or "Board Game".
    pub fn type_name(&self) -> &'static str {
        match self {
            Game::Video(_) => VideoGame::TYPE_NAME,
            Game::Board(_) => BoardGame::TYPE_NAME,
        }
    }

    pub fn as_video(&self) -> Option<&VideoGame> {
        match self {
            Game::Video(game) => Some(game),
            Game::Board(_) => None,
        }
    }

    pub fn as_board(&self) -> Option<&BoardGame> {
        match self {
            Game::Board(game) => Some(game),
            Game::Video(_) => None,
        }
    }
}

impl From<VideoGame> for Game {
    fn from(game: VideoGame) -> Self {
        Game::Video(game)
    }
}

impl From<BoardGame> for Game {
    fn from(game: BoardGame) -> Self {
        Game::Board(game)
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Game::Video(game) => Display::fmt(game, f),
            Game::Board(game) => Display::fmt(game, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;

    #[test]
    fn test_info_trims_and_keeps_values() {
        let info = GameInfo::new("  vg1 ", " Game A  ", 2020, 49.99).unwrap();
        assert_eq!(info.id(), "vg1");
        assert_eq!(info.title(), "Game A");
        assert_eq!(info.release_year(), 2020);
        assert_eq!(info.price(), 49.99);
    }

    #[test]
    fn test_info_rejects_invalid_fields() {
        for (id, title, year, price) in [
            ("", "t", 2000, 1.0),
            ("   ", "t", 2000, 1.0),
            ("id", "", 2000, 1.0),
            ("id", " \t", 2000, 1.0),
            ("id", "t", 1949, 1.0),
            ("id", "t", 2025, 1.0),
            ("id", "t", 2000, 0.0),
            ("id", "t", 2000, -5.0),
            ("id", "t", 2000, f64::NAN),
            ("id", "t", 2000, f64::INFINITY),
        ] {
            let result = GameInfo::new(id, title, year, price);
            assert!(
                matches!(result, Err(GameError::InvalidArgument(_))),
                "expected rejection for {id:?} {title:?} {year} {price}"
            );
        }
    }

    #[test]
    fn test_range_edges_are_inclusive() {
        assert!(GameInfo::new("a", "t", MIN_RELEASE_YEAR, 0.01).is_ok());
        assert!(GameInfo::new("b", "t", MAX_RELEASE_YEAR, 0.01).is_ok());
    }

    #[test]
    fn test_failed_setter_leaves_value_alone() {
        let mut info = GameInfo::new("id", "Title", 2000, 10.0).unwrap();
        assert!(info.set_title("   ").is_err());
        assert!(info.set_release_year(3000).is_err());
        assert!(info.set_price(0.0).is_err());
        assert_eq!(info.title(), "Title");
        assert_eq!(info.release_year(), 2000);
        assert_eq!(info.price(), 10.0);

        info.set_title("  New ").unwrap();
        assert_eq!(info.title(), "New");
    }

    #[test]
    fn test_equality_and_hash_use_id_only() {
        use std::collections::HashSet;

        let a: Game = VideoGame::new("x", "One", 2001, 5.0, "PC", 3, Genre::Action)
            .unwrap()
            .into();
        let b: Game = BoardGame::new("x", "Two", 2010, 50.0, 4, 90).unwrap().into();
        let c: Game = BoardGame::new("y", "Two", 2010, 50.0, 4, 90).unwrap().into();

        assert_eq!(a, b);
        assert_ne!(b, c);

        let set: HashSet<Game> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_type_name_and_display() {
        let video: Game = VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", 10, Genre::Rpg)
            .unwrap()
            .into();
        let board: Game = BoardGame::new("bg1", "Game B", 2019, 39.99, 4, 60).unwrap().into();

        assert_eq!(video.type_name(), "Video Game");
        assert_eq!(board.type_name(), "Board Game");
        assert_eq!(
            video.to_string(),
            "ID: vg1, Title: Game A, Year: 2020, Price: €49.99, Type: Video Game, Platform: PC, Hours: 10, Genre: RPG"
        );
        assert_eq!(
            board.to_string(),
            "ID: bg1, Title: Game B, Year: 2019, Price: €39.99, Type: Board Game, Players: 4, Session: 60 min"
        );
    }
}
