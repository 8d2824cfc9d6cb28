use crate::model::Game;

/// Summary of the collection at the moment it was computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionStats<'a> {
    pub video_games: usize,
    pub board_games: usize,
    /// Highest-priced game; on equal prices the smallest id wins. `None` when empty.
    pub most_expensive: Option<&'a Game>,
    /// Mean of all prices, 0.0 when empty.
    pub average_price: f64,
}

impl<'a> CollectionStats<'a> {
    pub(crate) fn compute(games: impl Iterator<Item = &'a Game>) -> Self {
        let mut stats = CollectionStats {
            video_games: 0,
            board_games: 0,
            most_expensive: None,
            average_price: 0.0,
        };
        let mut seen = 0.0;

        for game in games {
            match game {
                Game::Video(_) => stats.video_games += 1,
                Game::Board(_) => stats.board_games += 1,
            }
            // Running mean; a plain sum can overflow to infinity.
            seen += 1.0;
            stats.average_price += (game.price() - stats.average_price) / seen;

            let replaces_best = match stats.most_expensive {
                None => true,
                Some(best) => {
                    game.price() > best.price()
                        || (game.price() == best.price() && game.id() < best.id())
                }
            };
            if replaces_best {
                stats.most_expensive = Some(game);
            }
        }

        stats
    }

    pub fn total(&self) -> usize {
        self.video_games + self.board_games
    }
}
