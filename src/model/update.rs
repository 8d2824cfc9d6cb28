use super::Genre;
use serde::{Deserialize, Serialize};

/// Payload for patching an existing game.
///
/// `None` keeps the current value. The last three groups only apply to one
/// variant each; sending them for the other variant is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameUpdate {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub price: Option<f64>,

    // Video games
    pub platform: Option<String>,
    pub play_hours: Option<i32>,
    pub genre: Option<Genre>,

    // Board games
    pub player_count: Option<i32>,
    pub average_session_minutes: Option<i32>,
}

impl GameUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the video-game-only fields this patch sets.
    pub(crate) fn video_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.platform.is_some() {
            fields.push("platform");
        }
        if self.play_hours.is_some() {
            fields.push("play hours");
        }
        if self.genre.is_some() {
            fields.push("genre");
        }
        fields
    }

    /// Names of the board-game-only fields this patch sets.
    pub(crate) fn board_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.player_count.is_some() {
            fields.push("player count");
        }
        if self.average_session_minutes.is_some() {
            fields.push("average session minutes");
        }
        fields
    }
}
