//! Undo/redo history of board snapshots.
//!
//! The history is a linear log of snapshots plus a cursor. Entries after
//! the cursor are the redo-able future; recording a new snapshot from an
//! earlier cursor discards them.

use super::board::Board;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable snapshot of the board after a move.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::{Board, HistoryEntry};
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     board: Board::new(3),
///     move_count: 0,
///     recorded_at: Utc::now(),
/// };
/// assert_eq!(entry.move_count, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The board as it stood
    pub board: Board,
    /// Moves made up to this snapshot
    pub move_count: u64,
    /// When the snapshot was taken
    pub recorded_at: DateTime<Utc>,
}

/// Linear undo/redo log with a cursor.
///
/// The log is never empty: it always holds at least the initial snapshot
/// and the cursor always points at a valid entry.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::{Board, Move, MoveHistory, PegId};
/// use chrono::Utc;
///
/// let start = Board::new(3);
/// let mut history = MoveHistory::new(start.clone(), Utc::now());
///
/// let next = start.with_move(Move::new(PegId::A, PegId::C)).unwrap();
/// history.record(next.clone(), 1, Utc::now());
///
/// assert_eq!(history.undo().map(|e| e.board.clone()), Some(start));
/// assert_eq!(history.redo().map(|e| e.board.clone()), Some(next));
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

/// Reasons a serialized history is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History has no entries")]
    Empty,

    #[error("History cursor {cursor} is past the last entry (len {len})")]
    CursorOutOfRange { cursor: usize, len: usize },
}

#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl TryFrom<RawHistory> for MoveHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        if raw.cursor >= raw.entries.len() {
            return Err(HistoryError::CursorOutOfRange {
                cursor: raw.cursor,
                len: raw.entries.len(),
            });
        }
        Ok(Self {
            entries: raw.entries,
            cursor: raw.cursor,
        })
    }
}

impl MoveHistory {
    /// Create a history holding only `initial` at move count 0.
    pub fn new(initial: Board, recorded_at: DateTime<Utc>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: initial,
                move_count: 0,
                recorded_at,
            }],
            cursor: 0,
        }
    }

    /// Record a snapshot after the cursor.
    ///
    /// Any redo-able entries are discarded before the snapshot is appended;
    /// the cursor then points at the new snapshot.
    pub fn record(&mut self, board: Board, move_count: u64, recorded_at: DateTime<Utc>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            board,
            move_count,
            recorded_at,
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry.
    ///
    /// Returns the entry now under the cursor, or `None` (leaving the
    /// history unchanged) when already at the first entry.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry.
    ///
    /// Returns the entry now under the cursor, or `None` (leaving the
    /// history unchanged) when already at the last entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Replace the log with a single entry for `initial` at move count 0.
    pub fn reset(&mut self, initial: Board, recorded_at: DateTime<Utc>) {
        *self = Self::new(initial, recorded_at);
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Entry under the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including the redo-able future.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; the initial snapshot cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
