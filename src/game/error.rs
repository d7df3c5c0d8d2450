//! Errors surfaced at the presentation boundary.

use super::config::ConfigError;
use crate::core::{BoardError, MoveError, PegError};
use thiserror::Error;

/// Any failure a presentation layer can trigger through the controller.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Peg(#[from] PegError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Board(#[from] BoardError),
}
