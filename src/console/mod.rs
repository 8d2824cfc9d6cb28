//! # Console Front End
//!
//! The interactive text menu. It reads user input, builds entities, calls into
//! [`GameCollection`] and prints the results. It holds no game state of its own.
//!
//! The menu is generic over its input and output so tests can drive it with an
//! in-memory script.
//!
//! Every recoverable [`GameError`](crate::GameError) is printed as
//! `Error: <message>` and the menu is shown again. End of input quits normally;
//! only a failing console stream ends [`Menu::run`] with an error.

pub mod prompt;

pub use prompt::*;

use crate::collection::GameCollection;
use crate::error::GameError;
use crate::model::{BoardGame, Game, GameUpdate, Genre, VideoGame};
use std::io::{self, BufRead, Write};
use tracing::{info, info_span, warn};

const RULE: &str = "==================================================";

pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    collection: GameCollection,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu over an empty collection.
    pub fn new(input: R, output: W) -> Self {
        Self::with_collection(GameCollection::new(), input, output)
    }

    pub fn with_collection(collection: GameCollection, input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            collection,
        }
    }

    pub fn collection(&self) -> &GameCollection {
        &self.collection
    }

    pub fn output(&self) -> &W {
        self.prompter.output()
    }

    /// Runs the menu until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.say_or_io("=== GAME COLLECTION ===")?;
        self.say_or_io("Manage your video games and board games.")?;

        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(ConsoleError::Game(e)) => {
                    warn!(error = %e, "Action failed");
                    self.say_or_io(format!("Error: {e}"))?;
                }
                Err(ConsoleError::EndOfInput) => {
                    info!("Input closed");
                    break;
                }
                Err(ConsoleError::Io(e)) => return Err(e),
            }
        }

        self.say_or_io("Goodbye!")
    }

    fn say_or_io(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        match self.prompter.say(line) {
            Err(ConsoleError::Io(e)) => Err(e),
            _ => Ok(()),
        }
    }

    /// Shows the menu and handles one choice. `Ok(false)` means exit.
    fn step(&mut self) -> Result<bool, ConsoleError> {
        let p = &mut self.prompter;
        p.say("")?;
        p.say(RULE)?;
        p.say("MAIN MENU")?;
        p.say(RULE)?;
        p.say("1. Add game")?;
        p.say("2. Find game by ID")?;
        p.say("3. Find games under a price")?;
        p.say("4. Find board games by player count")?;
        p.say("5. Remove game")?;
        p.say("6. Update game")?;
        p.say("7. Show statistics")?;
        p.say("8. List all games")?;
        p.say("0. Exit")?;
        p.say(RULE)?;

        let choice = p.text("Your choice: ")?;
        if choice == "0" {
            return Ok(false);
        }

        let _span = info_span!("menu", %choice).entered();
        match choice.as_str() {
            "1" => self.add_game()?,
            "2" => self.find_by_id()?,
            "3" => self.find_by_max_price()?,
            "4" => self.find_by_player_count()?,
            "5" => self.remove_game()?,
            "6" => self.update_game()?,
            "7" => self.show_statistics()?,
            "8" => self.list_all()?,
            _ => self.prompter.say("Invalid choice, try again.")?,
        }
        Ok(true)
    }

    fn add_game(&mut self) -> Result<(), ConsoleError> {
        let p = &mut self.prompter;
        p.say("")?;
        p.say("--- ADD GAME ---")?;
        p.say("1. Video game")?;
        p.say("2. Board game")?;

        let game: Game = match p.number::<i32>("Type: ")? {
            1 => self.read_video_game()?.into(),
            2 => self.read_board_game()?.into(),
            other => return Err(GameError::invalid(format!("unknown game type: {other}")).into()),
        };

        let type_name = game.type_name();
        self.collection.add(game)?;
        self.prompter.say(format!("{type_name} added."))?;
        Ok(())
    }

    fn read_video_game(&mut self) -> Result<VideoGame, ConsoleError> {
        let p = &mut self.prompter;
        let id = p.text("ID: ")?;
        let title = p.text("Title: ")?;
        let year = p.number("Release year: ")?;
        let price = p.number("Price (€): ")?;
        let platform = p.text("Platform: ")?;
        let hours = p.number("Play time (hours): ")?;

        p.say(Genre::menu())?;
        let genre = Genre::from_index(p.number(&format!("Genre (1-{}): ", Genre::ALL.len()))?)?;

        Ok(VideoGame::new(&id, &title, year, price, &platform, hours, genre)?)
    }

    fn read_board_game(&mut self) -> Result<BoardGame, ConsoleError> {
        let p = &mut self.prompter;
        let id = p.text("ID: ")?;
        let title = p.text("Title: ")?;
        let year = p.number("Release year: ")?;
        let price = p.number("Price (€): ")?;
        let players = p.number("Players (2-10): ")?;
        let minutes = p.number("Average session (minutes): ")?;

        Ok(BoardGame::new(&id, &title, year, price, players, minutes)?)
    }

    fn find_by_id(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.text("Game ID: ")?;
        let game = self.collection.find_by_id(&id)?;
        self.prompter.say(game)?;
        Ok(())
    }

    fn find_by_max_price(&mut self) -> Result<(), ConsoleError> {
        let max_price: f64 = self.prompter.number("Maximum price (€): ")?;
        let games = self.collection.find_by_max_price(max_price)?;

        let p = &mut self.prompter;
        if games.is_empty() {
            p.say(format!("No games cheaper than €{max_price:.2}."))?;
        } else {
            p.say(format!("Found {} game(s):", games.len()))?;
            for game in games {
                p.say(game)?;
            }
        }
        Ok(())
    }

    fn find_by_player_count(&mut self) -> Result<(), ConsoleError> {
        let players: i32 = self.prompter.number("Number of players (2-10): ")?;
        let games = self.collection.find_board_games_by_player_count(players)?;

        let p = &mut self.prompter;
        if games.is_empty() {
            p.say(format!("No board games for {players} players."))?;
        } else {
            p.say(format!("Found {} board game(s):", games.len()))?;
            for game in games {
                p.say(game)?;
            }
        }
        Ok(())
    }

    fn remove_game(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.text("ID of the game to remove: ")?;
        let game = self.collection.find_by_id(&id)?;
        self.prompter.say(game)?;

        let answer = self.prompter.text("Remove this game? (y/N): ")?.to_lowercase();
        if answer == "y" || answer == "yes" {
            self.collection.remove(&id)?;
            self.prompter.say("Game removed.")?;
        } else {
            self.prompter.say("Cancelled.")?;
        }
        Ok(())
    }

    fn update_game(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.text("ID of the game to update: ")?;
        let current = self.collection.find_by_id(&id)?.clone();

        let p = &mut self.prompter;
        p.say(&current)?;
        p.say("Enter new values (leave empty to keep the current one):")?;

        let mut update = GameUpdate {
            title: p.optional_text(&format!("Title [{}]: ", current.title()))?,
            release_year: p.optional(&format!("Release year [{}]: ", current.release_year()))?,
            price: p.optional(&format!("Price [€{:.2}]: ", current.price()))?,
            ..Default::default()
        };

        match &current {
            Game::Video(game) => {
                update.platform = p.optional_text(&format!("Platform [{}]: ", game.platform()))?;
                update.play_hours = p.optional(&format!("Play time [{} hours]: ", game.play_hours()))?;
                p.say(Genre::menu())?;
                update.genre = p.optional(&format!("Genre (name or 1-{}) [{}]: ", Genre::ALL.len(), game.genre()))?;
            }
            Game::Board(game) => {
                update.player_count = p.optional(&format!("Players [{}]: ", game.player_count()))?;
                update.average_session_minutes = p.optional(&format!(
                    "Average session [{} min]: ",
                    game.average_session_minutes()
                ))?;
            }
        }

        if update.is_empty() {
            p.say("Nothing to change.")?;
            return Ok(());
        }

        let updated = self.collection.patch(&id, update)?;
        self.prompter.say(updated)?;
        self.prompter.say("Game updated.")?;
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<(), ConsoleError> {
        let p = &mut self.prompter;
        p.say("")?;
        p.say("--- STATISTICS ---")?;
        if self.collection.is_empty() {
            p.say("The collection is empty.")?;
            return Ok(());
        }

        let stats = self.collection.statistics();
        p.say(format!("Video games: {}", stats.video_games))?;
        p.say(format!("Board games: {}", stats.board_games))?;
        p.say(format!("Total games: {}", stats.total()))?;
        if let Some(game) = stats.most_expensive {
            p.say("Most expensive:")?;
            p.say(game)?;
        }
        p.say(format!("Average price: €{:.2}", stats.average_price))?;
        Ok(())
    }

    fn list_all(&mut self) -> Result<(), ConsoleError> {
        let p = &mut self.prompter;
        p.say("")?;
        p.say("--- ALL GAMES ---")?;
        if self.collection.is_empty() {
            p.say("The collection is empty.")?;
            return Ok(());
        }

        let games = self.collection.all();
        p.say(format!("Total games: {}", games.len()))?;
        for game in &games {
            p.say(game)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(collection: GameCollection, script: &str) -> (GameCollection, String) {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut menu = Menu::with_collection(collection, input, Vec::new());
        menu.run().unwrap();
        let output = String::from_utf8(menu.output().clone()).unwrap();
        (menu.collection, output)
    }

    fn seeded() -> GameCollection {
        let mut collection = GameCollection::new();
        collection
            .add(VideoGame::new("vg1", "Game A", 2020, 49.99, "PC", 10, Genre::Rpg).unwrap().into())
            .unwrap();
        collection
            .add(BoardGame::new("bg1", "Game B", 2019, 39.99, 4, 60).unwrap().into())
            .unwrap();
        collection
    }

    #[test]
    fn test_add_video_game_then_exit() {
        let script = "1\n1\nvg9\nHalf Life\n1998\n9.99\nPC\n12\n10\n0\n";
        let (collection, output) = run_script(GameCollection::new(), script);

        let game = collection.find_by_id("vg9").unwrap();
        assert_eq!(game.title(), "Half Life");
        assert_eq!(game.as_video().unwrap().genre(), Genre::Shooter);
        assert!(output.contains("Video Game added."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_input_reports_error_and_continues() {
        // Player count 1 is rejected; then a duplicate id; then exit.
        let script = "1\n2\nbg2\nSolo\n2000\n10\n1\n30\n1\n2\nbg1\nCopy\n2000\n10\n2\n30\n0\n";
        let (collection, output) = run_script(seeded(), script);

        assert_eq!(collection.len(), 2);
        assert!(output.contains("Error: Invalid argument: player count must be between 2 and 10, got 1"));
        assert!(output.contains("Error: Game already in collection: bg1"));
    }

    #[test]
    fn test_unknown_choice_and_end_of_input() {
        let (_, output) = run_script(GameCollection::new(), "42\n");
        assert!(output.contains("Invalid choice, try again."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_searches_print_matches() {
        let (_, output) = run_script(seeded(), "3\n45\n4\n4\n2\nmissing\n0\n");
        assert!(output.contains("Found 1 game(s):"));
        assert!(output.contains("Found 1 board game(s):"));
        assert_eq!(output.matches("ID: bg1").count(), 2);
        assert!(output.contains("Error: Game not found: missing"));
    }

    #[test]
    fn test_remove_needs_confirmation() {
        let (collection, output) = run_script(seeded(), "5\nvg1\nn\n5\nvg1\nYES\n0\n");
        assert!(output.contains("Cancelled."));
        assert!(output.contains("Game removed."));
        assert!(!collection.contains("vg1"));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_update_keeps_empty_fields() {
        // title, year, price, platform, hours, genre
        let script = "6\nvg1\nGame A+\n\n\n\n20\nhorror\n0\n";
        let (collection, output) = run_script(seeded(), script);

        let game = collection.find_by_id("vg1").unwrap();
        assert_eq!(game.title(), "Game A+");
        assert_eq!(game.release_year(), 2020);
        assert_eq!(game.price(), 49.99);
        let video = game.as_video().unwrap();
        assert_eq!(video.platform(), "PC");
        assert_eq!(video.play_hours(), 20);
        assert_eq!(video.genre(), Genre::Horror);
        assert!(output.contains("Game updated."));
    }

    #[test]
    fn test_update_picks_genre_by_menu_number() {
        // title, year, price, platform, hours kept; genre 9 is Horror
        let script = "6\nvg1\n\n\n\n\n\n9\n0\n";
        let (collection, output) = run_script(seeded(), script);

        let video = collection.find_by_id("vg1").unwrap().as_video().unwrap().clone();
        assert_eq!(video.genre(), Genre::Horror);
        assert!(output.contains("9. Horror"));
        assert!(output.contains("Game updated."));
    }

    #[test]
    fn test_invalid_update_changes_nothing() {
        // players 12 is out of range
        let script = "6\nbg1\nRenamed\n\n\n12\n\n0\n";
        let (collection, output) = run_script(seeded(), script);

        assert_eq!(collection.find_by_id("bg1").unwrap().title(), "Game B");
        assert!(output.contains("Error: Invalid argument: player count"));
    }

    #[test]
    fn test_statistics_and_listing() {
        let (_, output) = run_script(seeded(), "7\n8\n0\n");
        assert!(output.contains("Video games: 1"));
        assert!(output.contains("Board games: 1"));
        assert!(output.contains("Total games: 2"));
        assert!(output.contains("Average price: €44.99"));

        let listing = output.split("--- ALL GAMES ---").nth(1).unwrap();
        let a = listing.find("ID: vg1").unwrap();
        let b = listing.find("ID: bg1").unwrap();
        assert!(a < b, "listing should be sorted by title");
    }

    #[test]
    fn test_statistics_on_empty_collection() {
        let (_, output) = run_script(GameCollection::new(), "7\n0\n");
        assert!(output.contains("The collection is empty."));
    }
}
