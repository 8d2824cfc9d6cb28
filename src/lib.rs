#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Game Collection
//!
//! > **Keep track of your video games and board games.**
//!
//! An interactive console application for managing a personal collection of games:
//! add, search, update, remove, and summarize. The core is an in-memory collection
//! that never lets an invalid game in; the text menu on top of it is thin and
//! replaceable.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Always-valid entities
//! Every constructor and setter in [`model`] validates its input and returns
//! [`GameError::InvalidArgument`] on failure, leaving the value untouched. There is no
//! way to hold a `Game` with an empty title or a price of zero.
//!
//! ### 2. A closed set of variants
//! [`Game`](model::Game) is an enum of [`VideoGame`](model::VideoGame) and
//! [`BoardGame`](model::BoardGame). Filtering by kind is a `match`, not a type check.
//!
//! ### 3. One owner
//! The [`GameCollection`](collection::GameCollection) owns every game. Lookups hand out
//! shared borrows; changes go through `update` (replace) or `patch` (field-level,
//! all-or-nothing).
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - generic [`ResourceStore`](framework::ResourceStore) and the
//!   [`Entity`](framework::Entity) trait it is written against
//! - [`model`] - the game entities and the [`GameUpdate`](model::GameUpdate) patch
//! - [`collection`] - the collection service and its statistics
//! - [`console`] - the interactive menu
//! - [`runtime`] - tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the menu, logging store operations to stderr
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod collection;
pub mod console;
pub mod error;
pub mod framework;
pub mod model;
pub mod runtime;

pub use error::GameError;
