//! Three-peg board and the move engine.

use super::moves::{Move, MoveError};
use super::peg::{Disk, PegId, PEG_COUNT};
use super::validity::{check_pegs, BoardError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three pegs holding `N` distinct disks.
///
/// Each peg is stored bottom-to-top, so the last element is the only disk
/// that can move. Boards built through [`Board::new`] or
/// [`Board::from_pegs`] always satisfy the board invariant, and
/// [`Board::apply_move`] preserves it.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::{Board, Move, PegId};
///
/// let mut board = Board::new(3);
/// assert_eq!(board.peg(PegId::A), &[3, 2, 1]);
///
/// board.apply_move(Move::new(PegId::A, PegId::C)).unwrap();
/// assert_eq!(board.top(PegId::C), Some(1));
/// assert!(board.apply_move(Move::new(PegId::A, PegId::C)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Vec<Disk>; PEG_COUNT]", into = "[Vec<Disk>; PEG_COUNT]")]
pub struct Board {
    pegs: [Vec<Disk>; PEG_COUNT],
}

impl Board {
    /// All `disk_count` disks stacked on peg A.
    pub fn new(disk_count: Disk) -> Self {
        Self::stacked_on(disk_count, PegId::A)
    }

    /// All `disk_count` disks stacked on `peg`.
    pub fn stacked_on(disk_count: Disk, peg: PegId) -> Self {
        let mut pegs: [Vec<Disk>; PEG_COUNT] = Default::default();
        pegs[peg.index()] = (1..=disk_count).rev().collect();
        Self { pegs }
    }

    /// Build a board from raw bottom-to-top peg contents.
    ///
    /// Fails with every violation of the board invariant if the contents
    /// are not a valid arrangement.
    pub fn from_pegs(pegs: [Vec<Disk>; PEG_COUNT]) -> Result<Self, BoardError> {
        check_pegs(&pegs)?;
        Ok(Self { pegs })
    }

    /// Disks on `peg`, bottom-to-top.
    pub fn peg(&self, peg: PegId) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// All pegs in index order.
    pub fn pegs(&self) -> &[Vec<Disk>; PEG_COUNT] {
        &self.pegs
    }

    /// Top disk of `peg`, if any.
    pub fn top(&self, peg: PegId) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// Total number of disks on the board.
    pub fn disk_count(&self) -> Disk {
        self.pegs.iter().map(Vec::len).sum::<usize>() as Disk
    }

    /// Peg currently holding `disk`.
    pub fn locate(&self, disk: Disk) -> Option<PegId> {
        PegId::ALL
            .into_iter()
            .find(|p| self.pegs[p.index()].contains(&disk))
    }

    /// Peg whose top disk is `disk`, i.e. where `disk` can be picked up.
    pub fn peg_with_top(&self, disk: Disk) -> Option<PegId> {
        PegId::ALL.into_iter().find(|p| self.top(*p) == Some(disk))
    }

    /// Whether every disk sits on `target`.
    pub fn is_solved(&self, target: PegId) -> bool {
        self.pegs[target.index()].len() == usize::from(self.disk_count())
    }

    /// Check a move without applying it.
    ///
    /// Reports the reason a move would be rejected.
    pub fn check_move(&self, mv: Move) -> Result<Disk, MoveError> {
        if mv.from == mv.to {
            return Err(MoveError::SamePeg(mv.from));
        }
        let disk = self.top(mv.from).ok_or(MoveError::EmptySource(mv.from))?;
        match self.top(mv.to) {
            Some(top) if top < disk => Err(MoveError::LargerOnSmaller { disk, top }),
            _ => Ok(disk),
        }
    }

    /// True iff `from != to`, `from` is non-empty, and `to` is empty or its
    /// top disk is larger than the top disk of `from`.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Move the top disk of `mv.from` onto `mv.to`.
    ///
    /// Returns the moved disk. An illegal move leaves the board untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<Disk, MoveError> {
        let disk = self.check_move(mv)?;
        self.pegs[mv.from.index()].pop();
        self.pegs[mv.to.index()].push(disk);
        Ok(disk)
    }

    /// Pure variant of [`Board::apply_move`] returning a new board.
    pub fn with_move(&self, mv: Move) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }
}

impl TryFrom<[Vec<Disk>; PEG_COUNT]> for Board {
    type Error = BoardError;

    fn try_from(pegs: [Vec<Disk>; PEG_COUNT]) -> Result<Self, Self::Error> {
        Self::from_pegs(pegs)
    }
}

impl From<Board> for [Vec<Disk>; PEG_COUNT] {
    fn from(board: Board) -> Self {
        board.pegs
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in PegId::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{:?}", peg, self.peg(peg))?;
        }
        Ok(())
    }
}
