//! Single moves and the reasons a move can be rejected.

use super::peg::PegId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Relocation of the top disk of `from` onto `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }

    /// Build a move from raw peg indices.
    ///
    /// Returns `None` if either index is outside `0..3`.
    pub fn from_indices(from: usize, to: usize) -> Option<Self> {
        let from = PegId::try_from(from).ok()?;
        let to = PegId::try_from(to).ok()?;
        Some(Self { from, to })
    }

    /// The move as a pair of raw peg indices.
    pub fn indices(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Why a move was rejected.
///
/// A rejected move never mutates the board and never records history.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cannot move peg {0} onto itself")]
    SamePeg(PegId),

    #[error("Peg {0} has no disk to move")]
    EmptySource(PegId),

    #[error("Disk {disk} cannot be placed on smaller disk {top}")]
    LargerOnSmaller { disk: u8, top: u8 },

    #[error("Moves are locked while auto-solve is running")]
    AutoSolveActive,
}
