//! Board validity checks.
//!
//! A board is valid when its pegs together hold every disk `1..=N` exactly
//! once and every peg is strictly decreasing from bottom to top. Checks use
//! Stillwater's `Validation` so that every violation is reported in a single
//! pass instead of stopping at the first one.

use super::peg::{Disk, PegId, PEG_COUNT};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single breach of the board invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardViolation {
    #[error("Disk {disk} on peg {peg} is outside 1..={max}")]
    OutOfRange { peg: PegId, disk: Disk, max: Disk },

    #[error("Disk {0} appears more than once")]
    Duplicate(Disk),

    #[error("Disk {0} is missing")]
    Missing(Disk),

    #[error("Peg {peg} holds disk {above} on top of smaller disk {below}")]
    Misordered { peg: PegId, below: Disk, above: Disk },

    #[error("Board holds {0} disks, more than the supported maximum")]
    TooManyDisks(usize),
}

/// Error returned when raw peg contents do not form a valid board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid board: {}", describe(.violations))]
pub struct BoardError {
    pub violations: Vec<BoardViolation>,
}

fn describe(violations: &[BoardViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check raw peg contents against the board invariant.
///
/// Returns `Validation::Success(())` if the pegs form a valid board, or a
/// failure carrying ALL violations found.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::validate_pegs;
///
/// assert!(validate_pegs(&[vec![3, 2, 1], vec![], vec![]]).is_success());
/// assert!(validate_pegs(&[vec![1, 2], vec![], vec![]]).is_failure());
/// ```
pub fn validate_pegs(
    pegs: &[Vec<Disk>; PEG_COUNT],
) -> Validation<(), NonEmptyVec<BoardViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<BoardViolation>>> = Vec::new();

    let total: usize = pegs.iter().map(Vec::len).sum();
    if total > usize::from(Disk::MAX) {
        return Validation::fail(BoardViolation::TooManyDisks(total));
    }
    let max = total as Disk;

    // Range
    for (peg, contents) in PegId::ALL.into_iter().zip(pegs.iter()) {
        for &disk in contents {
            let check = if disk == 0 || disk > max {
                Validation::fail(BoardViolation::OutOfRange { peg, disk, max })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }
    }

    // Exactly once each
    let mut seen = vec![0usize; total + 1];
    for &disk in pegs.iter().flatten() {
        if let Some(count) = seen.get_mut(usize::from(disk)) {
            *count += 1;
        }
    }
    for size in 1..=max {
        let check = match seen[usize::from(size)] {
            0 => Validation::fail(BoardViolation::Missing(size)),
            1 => Validation::success(()),
            _ => Validation::fail(BoardViolation::Duplicate(size)),
        };
        checks.push(check);
    }

    // Strictly decreasing bottom-to-top
    for (peg, contents) in PegId::ALL.into_iter().zip(pegs.iter()) {
        for pair in contents.windows(2) {
            let check = if pair[1] >= pair[0] {
                Validation::fail(BoardViolation::Misordered {
                    peg,
                    below: pair[0],
                    above: pair[1],
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Same as [`validate_pegs`], collapsed into a `Result`.
pub fn check_pegs(pegs: &[Vec<Disk>; PEG_COUNT]) -> Result<(), BoardError> {
    match validate_pegs(pegs) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(BoardError {
            violations: errors.iter().cloned().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(pegs: [Vec<Disk>; 3]) -> Vec<BoardViolation> {
        check_pegs(&pegs).unwrap_err().violations
    }

    #[test]
    fn canonical_start_is_valid() {
        assert!(validate_pegs(&[vec![4, 3, 2, 1], vec![], vec![]]).is_success());
    }

    #[test]
    fn spread_board_is_valid() {
        assert!(check_pegs(&[vec![3], vec![2], vec![1]]).is_ok());
    }

    #[test]
    fn empty_board_is_valid() {
        assert!(check_pegs(&[vec![], vec![], vec![]]).is_ok());
    }

    #[test]
    fn misordered_peg_is_reported() {
        let found = violations([vec![1, 2], vec![], vec![]]);
        assert_eq!(
            found,
            vec![BoardViolation::Misordered {
                peg: PegId::A,
                below: 1,
                above: 2,
            }]
        );
    }

    #[test]
    fn accumulates_all_violations() {
        // Disk 2 duplicated, disk 3 missing, and peg C misordered.
        let found = violations([vec![2], vec![], vec![1, 2]]);

        assert!(found.contains(&BoardViolation::Duplicate(2)));
        assert!(found.contains(&BoardViolation::Missing(3)));
        assert!(found
            .iter()
            .any(|v| matches!(v, BoardViolation::Misordered { peg: PegId::C, .. })));
    }

    #[test]
    fn out_of_range_disk_is_reported() {
        let found = violations([vec![5, 1], vec![], vec![]]);

        assert!(found.contains(&BoardViolation::OutOfRange {
            peg: PegId::A,
            disk: 5,
            max: 2,
        }));
        assert!(found.contains(&BoardViolation::Missing(2)));
    }

    #[test]
    fn zero_sized_disk_is_out_of_range() {
        let found = violations([vec![1, 0], vec![], vec![]]);
        assert!(found
            .iter()
            .any(|v| matches!(v, BoardViolation::OutOfRange { disk: 0, .. })));
    }

    #[test]
    fn board_error_lists_violations() {
        let err = check_pegs(&[vec![1, 2], vec![], vec![]]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid board: Peg A holds disk 2 on top of smaller disk 1"
        );
    }
}
