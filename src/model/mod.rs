//! Game entities: the [`Game`] sum type, its two variants, and the patch payload.
//!
//! Every constructor and setter validates its input, so a value of any of these
//! types is always valid. See [`Entity for Game`](crate::framework::Entity) in
//! [`collection::entity`](crate::collection::entity) for how patches are applied.

pub mod board_game;
pub mod game;
pub mod genre;
pub mod update;
pub mod video_game;

pub use board_game::*;
pub use game::*;
pub use genre::*;
pub use update::*;
pub use video_game::*;
