//! Entry point: sets up tracing and runs the menu on stdin/stdout.
//!
//! Exits with status 0 when the user quits (or input ends) and non-zero when the
//! console itself fails.

use game_collection::console::Menu;
use game_collection::runtime::setup_tracing;
use std::io;
use tracing::{error, info};

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting game collection");

    let mut menu = Menu::new(io::stdin().lock(), io::stdout());
    if let Err(e) = menu.run() {
        error!(error = %e, "Console failed");
        return Err(format!("console failed: {e}"));
    }

    info!(games = menu.collection().len(), "Application completed successfully");
    Ok(())
}
