//! # Game Collection
//!
//! The in-memory collection service: owns every [`Game`] keyed by id and
//! implements lookups, filtered listings, edits and statistics on top of the
//! generic [`ResourceStore`].
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Game`]
//! - [`stats`] - [`CollectionStats`], the statistics record
//! - [`GameCollection`] - The service itself
//!
//! ## Ordering
//!
//! The backing map has no meaningful order, so every listing sorts explicitly:
//!
//! - by price: ascending price, equal prices by id
//! - by title: case-insensitive title, then exact title, then id
//!
//! ## Usage
//!
//! ```rust
//! use game_collection::collection::GameCollection;
//! use game_collection::model::{BoardGame, Genre, VideoGame};
//!
//! # fn main() -> Result<(), game_collection::GameError> {
//! let mut collection = GameCollection::new();
//! collection.add(VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", 10, Genre::Rpg)?.into())?;
//! collection.add(BoardGame::new("bg1", "Game B", 2019, 39.99, 4, 60)?.into())?;
//!
//! let cheap = collection.find_by_max_price(45.0)?;
//! assert_eq!(cheap.len(), 1);
//! assert_eq!(cheap[0].id(), "bg1");
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod stats;

pub use stats::*;

use crate::error::GameError;
use crate::framework::ResourceStore;
use crate::model::board_game::check_player_count;
use crate::model::game::non_blank;
use crate::model::{BoardGame, Game, GameUpdate};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// The authoritative set of games, keyed by id.
#[derive(Debug, Default)]
pub struct GameCollection {
    store: ResourceStore<Game>,
}

impl GameCollection {
    pub fn new() -> Self {
        Self {
            store: ResourceStore::new(),
        }
    }

    /// Adds a game. Fails with [`GameError::DuplicateElement`] if its id is taken.
    #[instrument(skip(self, game), fields(id = %game.id()))]
    pub fn add(&mut self, game: Game) -> Result<(), GameError> {
        self.store.insert(game)
    }

    /// Looks a game up by id (surrounding whitespace ignored).
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Result<&Game, GameError> {
        let id = non_blank("id", id)?;
        self.store.require(&id)
    }

    /// Games strictly cheaper than `max_price`, cheapest first.
    #[instrument(skip(self))]
    pub fn find_by_max_price(&self, max_price: f64) -> Result<Vec<&Game>, GameError> {
        if max_price.is_nan() || max_price <= 0.0 {
            return Err(GameError::invalid(format!(
                "maximum price must be positive, got {max_price}"
            )));
        }

        let mut games: Vec<&Game> = self
            .store
            .values()
            .filter(|game| game.price() < max_price)
            .collect();
        games.sort_by(|a, b| by_price(a, b));
        debug!(found = games.len(), "Price search");
        Ok(games)
    }

    /// Board games for exactly `player_count` players, sorted by title.
    #[instrument(skip(self))]
    pub fn find_board_games_by_player_count(
        &self,
        player_count: i32,
    ) -> Result<Vec<&BoardGame>, GameError> {
        check_player_count(player_count)?;

        let mut games: Vec<&BoardGame> = self
            .store
            .values()
            .filter_map(Game::as_board)
            .filter(|game| game.player_count() == player_count)
            .collect();
        games.sort_by(|a, b| by_title(a.info().title(), a.info().id(), b.info().title(), b.info().id()));
        debug!(found = games.len(), "Player count search");
        Ok(games)
    }

    /// Removes a game by id (surrounding whitespace ignored) and hands it back.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<Game, GameError> {
        let id = non_blank("id", id)?;
        self.store.remove(&id)
    }

    /// Replaces the stored game that has the same id as `game`.
    ///
    /// This is a whole-entity replace; use [`patch`](Self::patch) to change
    /// individual fields.
    #[instrument(skip(self, game), fields(id = %game.id()))]
    pub fn update(&mut self, game: Game) -> Result<(), GameError> {
        self.store.replace(game).map(|_| ())
    }

    /// Changes the fields set in `update` on the game with the given id.
    ///
    /// Either every supplied field is applied or, on the first invalid one,
    /// none are.
    #[instrument(skip(self))]
    pub fn patch(&mut self, id: &str, update: GameUpdate) -> Result<&Game, GameError> {
        let id = non_blank("id", id)?;
        self.store.update(&id, update)
    }

    pub fn statistics(&self) -> CollectionStats<'_> {
        CollectionStats::compute(self.store.values())
    }

    /// A copy of every game, sorted by title.
    pub fn all(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self.store.values().cloned().collect();
        games.sort_by(|a, b| by_title(a.title(), a.id(), b.title(), b.id()));
        games
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(&id.trim().to_string())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

fn by_price(a: &Game, b: &Game) -> Ordering {
    a.price()
        .total_cmp(&b.price())
        .then_with(|| a.id().cmp(b.id()))
}

fn by_title(a_title: &str, a_id: &str, b_title: &str, b_id: &str) -> Ordering {
    a_title
        .to_lowercase()
        .cmp(&b_title.to_lowercase())
        .then_with(|| a_title.cmp(b_title))
        .then_with(|| a_id.cmp(b_id))
}
