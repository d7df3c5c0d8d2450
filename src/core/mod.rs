//! Core puzzle model.
//!
//! This module contains the pure core of the engine:
//! - Pegs and disks
//! - The board and the move engine
//! - Board validity checks
//! - Undo/redo history
//!
//! Nothing in this module performs I/O or reads the clock; history
//! timestamps are supplied by the caller.

mod board;
mod history;
mod moves;
mod peg;
mod validity;

pub use board::Board;
pub use history::{HistoryEntry, HistoryError, MoveHistory};
pub use moves::{Move, MoveError};
pub use peg::{Disk, PegError, PegId, PEG_COUNT};
pub use validity::{check_pegs, validate_pegs, BoardError, BoardViolation};
