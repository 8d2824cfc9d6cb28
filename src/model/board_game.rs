use super::game::{in_range, positive};
use super::GameInfo;
use crate::error::GameError;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

pub const MIN_PLAYERS: i32 = 2;
pub const MAX_PLAYERS: i32 = 10;

/// A board game: the shared [`GameInfo`] plus player count and session length.
#[derive(Debug, Clone)]
pub struct BoardGame {
    info: GameInfo,
    player_count: i32,
    average_session_minutes: i32,
}

impl BoardGame {
    pub const TYPE_NAME: &'static str = "Board Game";

    /// Creates a new BoardGame instance.
    ///
    /// `player_count` must be between 2 and 10 and `average_session_minutes`
    /// strictly positive; the shared fields follow [`GameInfo::new`].
    pub fn new(
        id: &str,
        title: &str,
        release_year: i32,
        price: f64,
        player_count: i32,
        average_session_minutes: i32,
    ) -> Result<Self, GameError> {
        Ok(Self {
            info: GameInfo::new(id, title, release_year, price)?,
            player_count: check_player_count(player_count)?,
            average_session_minutes: positive("average session minutes", average_session_minutes)?,
        })
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut GameInfo {
        &mut self.info
    }

    pub fn player_count(&self) -> i32 {
        self.player_count
    }

    pub fn average_session_minutes(&self) -> i32 {
        self.average_session_minutes
    }

    pub fn set_player_count(&mut self, player_count: i32) -> Result<(), GameError> {
        self.player_count = check_player_count(player_count)?;
        Ok(())
    }

    pub fn set_average_session_minutes(&mut self, minutes: i32) -> Result<(), GameError> {
        self.average_session_minutes = positive("average session minutes", minutes)?;
        Ok(())
    }
}

/// Shared with the collection's player-count query.
pub(crate) fn check_player_count(player_count: i32) -> Result<i32, GameError> {
    in_range("player count", player_count, MIN_PLAYERS, MAX_PLAYERS)
}

impl PartialEq for BoardGame {
    fn eq(&self, other: &Self) -> bool {
        self.info.id() == other.info.id()
    }
}

impl Eq for BoardGame {}

impl Hash for BoardGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.id().hash(state);
    }
}

impl Display for BoardGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Type: {}, Players: {}, Session: {} min",
            self.info,
            Self::TYPE_NAME,
            self.player_count,
            self.average_session_minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_values() {
        let game = BoardGame::new("bg1", " Game B ", 2019, 39.99, 4, 60).unwrap();
        assert_eq!(game.info().id(), "bg1");
        assert_eq!(game.info().title(), "Game B");
        assert_eq!(game.player_count(), 4);
        assert_eq!(game.average_session_minutes(), 60);
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(BoardGame::new("a", "t", 2000, 1.0, MIN_PLAYERS, 30).is_ok());
        assert!(BoardGame::new("b", "t", 2000, 1.0, MAX_PLAYERS, 30).is_ok());
        for players in [-1, 0, 1, 11, 100] {
            assert!(
                matches!(
                    BoardGame::new("c", "t", 2000, 1.0, players, 30),
                    Err(GameError::InvalidArgument(_))
                ),
                "{players} players should be rejected"
            );
        }
    }

    #[test]
    fn test_session_length_must_be_positive() {
        assert!(BoardGame::new("a", "t", 2000, 1.0, 4, 0).is_err());
        assert!(BoardGame::new("a", "t", 2000, 1.0, 4, -10).is_err());
    }

    #[test]
    fn test_setters_validate() {
        let mut game = BoardGame::new("bg1", "Game B", 2019, 39.99, 4, 60).unwrap();

        assert!(game.set_player_count(1).is_err());
        assert!(game.set_average_session_minutes(0).is_err());
        assert_eq!(game.player_count(), 4);
        assert_eq!(game.average_session_minutes(), 60);

        game.set_player_count(6).unwrap();
        game.set_average_session_minutes(45).unwrap();
        assert_eq!(game.player_count(), 6);
        assert_eq!(game.average_session_minutes(), 45);
    }
}
