//! Peg identifiers.
//!
//! The puzzle always has exactly three pegs. `PegId` makes an out-of-range
//! peg unrepresentable once a raw index has been converted.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Size of a disk. `1` is the smallest disk.
pub type Disk = u8;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// Errors produced when converting raw peg indices.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PegError {
    #[error("Peg index {0} is out of range (expected 0, 1 or 2)")]
    OutOfRange(usize),
}

/// One of the three pegs, labelled A, B and C.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::PegId;
///
/// assert_eq!(PegId::A.index(), 0);
/// assert_eq!(PegId::third(PegId::A, PegId::C), PegId::B);
/// assert_eq!(PegId::try_from(2).unwrap(), PegId::C);
/// assert!(PegId::try_from(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PegId {
    A,
    B,
    C,
}

impl PegId {
    /// All pegs in index order.
    pub const ALL: [PegId; PEG_COUNT] = [PegId::A, PegId::B, PegId::C];

    /// Zero-based index of this peg.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    /// Display label of this peg.
    pub fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }

    /// The peg that is neither `a` nor `b`.
    ///
    /// When `a == b` the lowest-indexed other peg is returned, which keeps
    /// the auxiliary choice deterministic.
    pub fn third(a: PegId, b: PegId) -> PegId {
        Self::ALL
            .into_iter()
            .find(|p| *p != a && *p != b)
            .unwrap_or(PegId::A)
    }
}

impl TryFrom<usize> for PegId {
    type Error = PegError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PegError::OutOfRange(index))
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_try_from() {
        for peg in PegId::ALL {
            assert_eq!(PegId::try_from(peg.index()), Ok(peg));
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(PegId::try_from(3), Err(PegError::OutOfRange(3)));
        assert_eq!(PegId::try_from(usize::MAX), Err(PegError::OutOfRange(usize::MAX)));
    }

    #[test]
    fn third_picks_remaining_peg() {
        assert_eq!(PegId::third(PegId::A, PegId::B), PegId::C);
        assert_eq!(PegId::third(PegId::B, PegId::A), PegId::C);
        assert_eq!(PegId::third(PegId::A, PegId::C), PegId::B);
        assert_eq!(PegId::third(PegId::C, PegId::B), PegId::A);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(PegId::A.to_string(), "A");
        assert_eq!(PegId::B.to_string(), "B");
        assert_eq!(PegId::C.to_string(), "C");
    }
}
