//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log verbosity comes from the `RUST_LOG` environment variable; with nothing set only
//! errors are shown. Output goes to **stderr**, so log lines never mix with the menu
//! printed on stdout. The compact format hides the module prefix (`with_target(false)`).
//!
//! ```bash
//! # Store operations and rejected requests
//! RUST_LOG=info cargo run
//!
//! # Every lookup and query, with the menu action as span context
//! RUST_LOG=debug cargo run 2>debug.log
//!
//! # Only the store
//! RUST_LOG=game_collection::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store operations**: Insert, Get, Replace, Update, Delete with `entity_type` and `id`
//! - **Collection calls**: one span per call, carrying its arguments
//! - **Menu actions**: a `menu{choice=...}` span around each chosen action
//! - **Errors**: rejected requests at `warn`, fatal console failures at `error`
//!
//! With `RUST_LOG=info` a session adding and then removing a game looks like:
//!
//! ```text
//! INFO menu:add: Created entity_type="Game" id=vg1 size=1 choice=1 id=vg1
//! INFO menu:remove: Deleted entity_type="Game" id=vg1 size=0 choice=5 id="vg1"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - entity_type says what was touched
        .compact() // Compact format shows spans inline (e.g., "menu:remove")
        .init();
}
