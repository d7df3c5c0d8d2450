//! Macros for writing boards as literals.

/// Build a [`Board`](crate::core::Board) from bottom-to-top peg contents.
///
/// # Panics
///
/// Panics if the contents violate the board invariant. Use
/// [`Board::from_pegs`](crate::core::Board::from_pegs) for fallible input.
///
/// # Example
///
/// ```
/// use hanoi_engine::board;
/// use hanoi_engine::core::PegId;
///
/// let board = board![[3, 2], [], [1]];
/// assert_eq!(board.top(PegId::C), Some(1));
/// ```
#[macro_export]
macro_rules! board {
    ([$($a:expr),* $(,)?], [$($b:expr),* $(,)?], [$($c:expr),* $(,)?] $(,)?) => {
        match $crate::core::Board::from_pegs([
            ::std::vec![$($a),*],
            ::std::vec![$($b),*],
            ::std::vec![$($c),*],
        ]) {
            Ok(board) => board,
            Err(err) => panic!("{}", err),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Board, PegId};

    #[test]
    fn board_macro_builds_valid_board() {
        let board = board![[3, 2], [], [1]];
        assert_eq!(board.peg(PegId::A), &[3, 2]);
        assert!(board.peg(PegId::B).is_empty());
        assert_eq!(board.peg(PegId::C), &[1]);
    }

    #[test]
    fn board_macro_matches_constructor() {
        assert_eq!(board![[4, 3, 2, 1], [], []], Board::new(4));
    }

    #[test]
    fn board_macro_accepts_trailing_commas() {
        let board = board![[2,], [1,], [],];
        assert_eq!(board.disk_count(), 2);
    }

    #[test]
    #[should_panic(expected = "Invalid board")]
    fn board_macro_panics_on_invalid_contents() {
        let _ = board![[1, 2], [], []];
    }
}
