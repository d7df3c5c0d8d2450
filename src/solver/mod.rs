//! Optimal solutions.
//!
//! Two solvers share the classic recursive decomposition:
//! - [`solve`] moves a full stack from one peg to another in `2^n - 1` moves.
//! - [`optimal_continuation`] finishes the puzzle from any board reachable by
//!   legal moves, and [`next_hint`] takes its first move.
//!
//! Tie-breaks are fixed (largest unplaced disk first, the third peg as
//! auxiliary), so both solvers are deterministic.

use crate::core::{Board, Disk, Move, PegId};

/// Upper bound on the up-front allocation for a solution.
const MAX_PREALLOCATED_MOVES: usize = 1 << 16;

/// Minimum number of moves to transfer `disk_count` disks: `2^n - 1`.
///
/// Saturates at `u64::MAX` for 64 or more disks.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::solver::optimal_move_count;
///
/// assert_eq!(optimal_move_count(0), 0);
/// assert_eq!(optimal_move_count(3), 7);
/// assert_eq!(optimal_move_count(12), 4095);
/// ```
pub fn optimal_move_count(disk_count: Disk) -> u64 {
    match disk_count {
        0 => 0,
        n if n >= 64 => u64::MAX,
        n => u64::MAX >> (64 - u32::from(n)),
    }
}

/// Full move list carrying `disk_count` disks from `from` to `to`.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::PegId;
/// use hanoi_engine::solver::solve;
///
/// let moves = solve(3, PegId::A, PegId::C);
/// let pairs: Vec<_> = moves.iter().map(|m| m.indices()).collect();
/// assert_eq!(pairs, vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]);
/// ```
pub fn solve(disk_count: Disk, from: PegId, to: PegId) -> Vec<Move> {
    let capacity = usize::try_from(optimal_move_count(disk_count))
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED_MOVES);
    let mut moves = Vec::with_capacity(capacity);
    if from != to {
        transfer(disk_count, from, to, PegId::third(from, to), &mut moves);
    }
    moves
}

/// Move `n` disks from `from` to `to` using `via` as auxiliary.
fn transfer(n: Disk, from: PegId, to: PegId, via: PegId, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    transfer(n - 1, from, via, to, moves);
    moves.push(Move::new(from, to));
    transfer(n - 1, via, to, from, moves);
}

/// Optimal sequence finishing the puzzle on `target` from `board`.
///
/// Disks are resolved from the largest down. A disk already on its target
/// is left alone and the next smaller disk inherits the same target;
/// otherwise the smaller disks are first gathered on the third peg, the disk
/// moves, and the smaller disks follow with the canonical recursion.
///
/// `board` must be reachable by legal moves from a stacked start. The
/// result is empty when the board is already solved.
pub fn optimal_continuation(board: &Board, target: PegId) -> Vec<Move> {
    let mut moves = Vec::new();
    settle(board, board.disk_count(), target, &mut moves);
    moves
}

/// Bring disks `1..=disk` onto `target`, reading their current positions.
fn settle(board: &Board, disk: Disk, target: PegId, moves: &mut Vec<Move>) {
    if disk == 0 {
        return;
    }
    let Some(current) = board.locate(disk) else {
        return;
    };
    if current == target {
        settle(board, disk - 1, target, moves);
        return;
    }

    let aux = PegId::third(current, target);
    // Smaller disks have not moved yet when they are settled, so their
    // positions on `board` are still accurate.
    settle(board, disk - 1, aux, moves);
    moves.push(Move::new(current, target));
    transfer(disk - 1, aux, target, current, moves);
}

/// First move of the optimal continuation, or `None` if already solved.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::{Board, Move, PegId};
/// use hanoi_engine::solver::next_hint;
///
/// let board = Board::from_pegs([vec![3, 2], vec![], vec![1]]).unwrap();
/// assert_eq!(next_hint(&board, PegId::C), Some(Move::new(PegId::A, PegId::B)));
/// ```
pub fn next_hint(board: &Board, target: PegId) -> Option<Move> {
    optimal_continuation(board, target).into_iter().next()
}

/// Number of moves left on the optimal continuation.
pub fn remaining_moves(board: &Board, target: PegId) -> usize {
    optimal_continuation(board, target).len()
}
