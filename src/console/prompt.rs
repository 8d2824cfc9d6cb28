//! Line-oriented input helpers for the menu.

use crate::error::GameError;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Why a console interaction stopped.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The user's request was rejected by the collection; recoverable.
    #[error(transparent)]
    Game(#[from] GameError),

    /// Input was closed; treated as a request to quit.
    #[error("end of input")]
    EndOfInput,

    /// Reading or writing the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads trimmed lines from `input`, writing prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Shows `prompt` and returns the next line, trimmed.
    pub fn text(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses as `T`.
    pub fn number<T: FromStr>(&mut self, prompt: &str) -> Result<T, ConsoleError> {
        let mut answer = self.text(prompt)?;
        loop {
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => answer = self.text("Please enter a valid number: ")?,
            }
        }
    }

    /// Like [`number`](Self::number), but an empty answer means "no value".
    pub fn optional<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, ConsoleError> {
        let mut answer = self.text(prompt)?;
        loop {
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => answer = self.text("Please enter a valid value (or nothing to keep it): ")?,
            }
        }
    }

    /// Empty answer means "no value".
    pub fn optional_text(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        let answer = self.text(prompt)?;
        Ok((!answer.is_empty()).then_some(answer))
    }
}
