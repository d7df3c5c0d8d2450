//! Auto-solve playback.
//!
//! Playback is a plain queue of moves consumed one step at a time by an
//! external scheduler. A shared [`CancelToken`] is checked before each step.

use crate::core::Move;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for a running playback.
///
/// Clones observe the same flag, so a presentation layer can keep one to
/// stop playback from outside the controller.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Outcome of one playback step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A move was played
    Moved(Move),

    /// The last move has been played
    Finished,

    /// The token was cancelled before this step
    Cancelled,

    /// No playback is armed
    Idle,
}

/// Pending moves of an armed auto-solve.
#[derive(Debug)]
pub(crate) struct Playback {
    pending: VecDeque<Move>,
    token: CancelToken,
    total: usize,
}

impl Playback {
    pub(crate) fn new(moves: Vec<Move>, token: CancelToken) -> Self {
        let total = moves.len();
        Self {
            pending: moves.into(),
            token,
            total,
        }
    }

    /// Next move to play, checking the token first.
    pub(crate) fn next_step(&mut self) -> StepOutcome {
        if self.token.is_cancelled() {
            return StepOutcome::Cancelled;
        }
        match self.pending.pop_front() {
            Some(mv) => StepOutcome::Moved(mv),
            None => StepOutcome::Finished,
        }
    }

    pub(crate) fn token(&self) -> &CancelToken {
        &self.token
    }

    pub(crate) fn played(&self) -> usize {
        self.total - self.pending.len()
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PegId;

    #[test]
    fn token_clones_share_state() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());

        handle.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn playback_yields_moves_in_order_then_finishes() {
        let a = Move::new(PegId::A, PegId::C);
        let b = Move::new(PegId::A, PegId::B);
        let mut playback = Playback::new(vec![a, b], CancelToken::new());

        assert_eq!(playback.next_step(), StepOutcome::Moved(a));
        assert_eq!(playback.next_step(), StepOutcome::Moved(b));
        assert_eq!(playback.played(), 2);
        assert_eq!(playback.next_step(), StepOutcome::Finished);
    }

    #[test]
    fn cancelled_playback_stops_before_next_move() {
        let token = CancelToken::new();
        let mut playback = Playback::new(vec![Move::new(PegId::A, PegId::C)], token.clone());

        token.cancel();
        assert_eq!(playback.next_step(), StepOutcome::Cancelled);
        assert_eq!(playback.played(), 0);
        assert_eq!(playback.total(), 1);
    }
}
