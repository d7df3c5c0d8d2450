//! Pointer gesture capability.

use crate::core::{Disk, Move, MoveError, PegId};
use crate::game::controller::{GameController, Selection};

/// Gestures a presentation layer forwards to the game.
///
/// Front ends translate their own click and drag events into these calls;
/// the game answers synchronously.
pub trait Gestures {
    /// A peg was clicked or tapped.
    fn on_select(&mut self, peg: PegId) -> Selection;

    /// A disk was picked up. Returns whether the pick was accepted.
    fn on_drag_pick(&mut self, disk: Disk) -> bool;

    /// The picked disk was released over `peg`.
    fn on_drop(&mut self, peg: PegId) -> Option<Result<Move, MoveError>>;
}

impl Gestures for GameController {
    fn on_select(&mut self, peg: PegId) -> Selection {
        self.select_peg(peg)
    }

    fn on_drag_pick(&mut self, disk: Disk) -> bool {
        self.drag_start(disk)
    }

    fn on_drop(&mut self, peg: PegId) -> Option<Result<Move, MoveError>> {
        self.drop_on(peg)
    }
}
