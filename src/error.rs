//! Error types for the game collection.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while building games or working with the collection.
///
/// Every variant is recoverable: the front end reports it and lets the user try again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GameError {
    /// A supplied value violates a documented constraint.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A game with the same id is already in the collection.
    #[error("Game already in collection: {0}")]
    DuplicateElement(String),

    /// No game with the requested id is in the collection.
    #[error("Game not found: {0}")]
    ElementNotFound(String),
}

impl GameError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GameError::InvalidArgument(msg.into())
    }
}

impl From<FrameworkError> for GameError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::AlreadyExists(id) => GameError::DuplicateElement(id),
            FrameworkError::NotFound(id) => GameError::ElementNotFound(id),
        }
    }
}
