use super::game::{non_blank, positive};
use super::{GameInfo, Genre};
use crate::error::GameError;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A video game: the shared [`GameInfo`] plus platform, play time and genre.
#[derive(Debug, Clone)]
pub struct VideoGame {
    info: GameInfo,
    platform: String,
    play_hours: i32,
    genre: Genre,
}

impl VideoGame {
    pub const TYPE_NAME: &'static str = "Video Game";

    /// Creates a new VideoGame instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, stored trimmed
    /// * `title` - Game title, stored trimmed
    /// * `release_year` - Between 1950 and 2024
    /// * `price` - Strictly positive
    /// * `platform` - e.g. "PC", "PS5"; stored trimmed
    /// * `play_hours` - Hours to finish, strictly positive
    /// * `genre` - One of [`Genre::ALL`]
    ///
    /// # Errors
    /// [`GameError::InvalidArgument`] naming the first field that fails validation.
    pub fn new(
        id: &str,
        title: &str,
        release_year: i32,
        price: f64,
        platform: &str,
        play_hours: i32,
        genre: Genre,
    ) -> Result<Self, GameError> {
        Ok(Self {
            info: GameInfo::new(id, title, release_year, price)?,
            platform: non_blank("platform", platform)?,
            play_hours: positive("play hours", play_hours)?,
            genre,
        })
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn play_hours(&self) -> i32 {
        self.play_hours
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn set_platform(&mut self, platform: &str) -> Result<(), GameError> {
        self.platform = non_blank("platform", platform)?;
        Ok(())
    }

    pub fn set_play_hours(&mut self, play_hours: i32) -> Result<(), GameError> {
        self.play_hours = positive("play hours", play_hours)?;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }
}

impl PartialEq for VideoGame {
    fn eq(&self, other: &Self) -> bool {
        self.info.id() == other.info.id()
    }
}

impl Eq for VideoGame {}

impl Hash for VideoGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.id().hash(state);
    }
}

impl Display for VideoGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Type: {}, Platform: {}, Hours: {}, Genre: {}",
            self.info,
            Self::TYPE_NAME,
            self.platform,
            self.play_hours,
            self.genre
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_trimmed_values() {
        let game = VideoGame::new(" vg1", "Game A", 2020, 49.99, "  PC ", 10, Genre::Rpg).unwrap();
        assert_eq!(game.info().id(), "vg1");
        assert_eq!(game.info().title(), "Game A");
        assert_eq!(game.info().release_year(), 2020);
        assert_eq!(game.info().price(), 49.99);
        assert_eq!(game.platform(), "PC");
        assert_eq!(game.play_hours(), 10);
        assert_eq!(game.genre(), Genre::Rpg);
    }

    #[test]
    fn test_new_rejects_invalid_variant_fields() {
        let blank_platform = VideoGame::new("vg1", "Game A", 2020, 49.99, " ", 10, Genre::Rpg);
        assert!(matches!(blank_platform, Err(GameError::InvalidArgument(_))));

        let zero_hours = VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", 0, Genre::Rpg);
        assert!(matches!(zero_hours, Err(GameError::InvalidArgument(_))));

        let negative_hours = VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", -3, Genre::Rpg);
        assert!(matches!(negative_hours, Err(GameError::InvalidArgument(_))));

        let bad_base = VideoGame::new("vg1", "Game A", 1800, 49.99, "PC", 10, Genre::Rpg);
        assert!(matches!(bad_base, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_setters_validate() {
        let mut game = VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", 10, Genre::Rpg).unwrap();

        assert!(game.set_platform("").is_err());
        assert!(game.set_play_hours(0).is_err());
        assert_eq!(game.platform(), "PC");
        assert_eq!(game.play_hours(), 10);

        game.set_platform(" PS5 ").unwrap();
        game.set_play_hours(25).unwrap();
        game.set_genre(Genre::Horror);
        assert_eq!(game.platform(), "PS5");
        assert_eq!(game.play_hours(), 25);
        assert_eq!(game.genre(), Genre::Horror);
    }
}
