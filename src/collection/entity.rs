//! Entity trait implementation for the Game domain type.
//!
//! This module contains the [`Entity`] trait implementation that enables [`Game`]
//! to be kept in the generic [`ResourceStore`](crate::framework::ResourceStore).

use crate::error::GameError;
use crate::framework::Entity;
use crate::model::{Game, GameUpdate};

impl Entity for Game {
    type Id = String;
    type Update = GameUpdate;
    type Error = GameError;

    fn id(&self) -> &String {
        self.info().id_string()
    }

    /// Applies a patch field by field through the validating setters.
    ///
    /// Fields that belong to the other variant are refused up front. A later
    /// field can still fail after earlier ones were written; the store discards
    /// the draft in that case.
    fn on_update(&mut self, update: GameUpdate) -> Result<(), GameError> {
        let foreign = match self {
            Game::Video(_) => update.board_fields(),
            Game::Board(_) => update.video_fields(),
        };
        if !foreign.is_empty() {
            return Err(GameError::invalid(format!(
                "{} does not apply to a {}",
                foreign.join(", "),
                self.type_name()
            )));
        }

        let info = self.info_mut();
        if let Some(title) = &update.title {
            info.set_title(title)?;
        }
        if let Some(year) = update.release_year {
            info.set_release_year(year)?;
        }
        if let Some(price) = update.price {
            info.set_price(price)?;
        }

        match self {
            Game::Video(game) => {
                if let Some(platform) = &update.platform {
                    game.set_platform(platform)?;
                }
                if let Some(hours) = update.play_hours {
                    game.set_play_hours(hours)?;
                }
                if let Some(genre) = update.genre {
                    game.set_genre(genre);
                }
            }
            Game::Board(game) => {
                if let Some(players) = update.player_count {
                    game.set_player_count(players)?;
                }
                if let Some(minutes) = update.average_session_minutes {
                    game.set_average_session_minutes(minutes)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardGame, Genre, VideoGame};

    fn video() -> Game {
        VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", 10, Genre::Rpg)
            .unwrap()
            .into()
    }

    #[test]
    fn test_patch_sets_only_supplied_fields() {
        let mut game = video();
        game.on_update(GameUpdate {
            title: Some(" Game A: Director's Cut ".into()),
            play_hours: Some(14),
            genre: Some(Genre::Adventure),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(game.title(), "Game A: Director's Cut");
        assert_eq!(game.price(), 49.99);
        let video = game.as_video().unwrap();
        assert_eq!(video.platform(), "PC");
        assert_eq!(video.play_hours(), 14);
        assert_eq!(video.genre(), Genre::Adventure);
    }

    #[test]
    fn test_patch_refuses_fields_of_other_variant() {
        let mut board: Game = BoardGame::new("bg1", "Game B", 2019, 39.99, 4, 60).unwrap().into();
        let err = board
            .on_update(GameUpdate {
                title: Some("Renamed".into()),
                platform: Some("PC".into()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, GameError::InvalidArgument(ref msg) if msg.contains("platform")));
        assert_eq!(board.title(), "Game B");
    }

    #[test]
    fn test_entity_id_matches_game_id() {
        let game = video();
        assert_eq!(Entity::id(&game), "vg1");
    }
}
