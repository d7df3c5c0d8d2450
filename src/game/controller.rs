//! Game controller that owns the board, history, hint and playback.

use crate::core::{Board, Disk, HistoryEntry, Move, MoveError, MoveHistory, PegId};
use crate::game::config::{validate_disk_count, ConfigError, GameConfig, SolveSpeed, START_PEG};
use crate::game::error::GameError;
use crate::game::hint::Hint;
use crate::game::playback::{CancelToken, Playback, StepOutcome};
use crate::solver;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Result of a peg click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The peg is now selected
    Selected(PegId),

    /// The selected peg was clicked again
    Deselected,

    /// A move from the selected peg was made
    Moved(Move),

    /// A move from the selected peg was rejected; the selection is cleared
    Rejected(MoveError),

    /// The click had no effect
    Ignored,
}

/// Read-only snapshot of everything a presentation layer renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub board: Board,
    pub disk_count: Disk,
    pub move_count: u64,
    pub optimal_moves: u64,
    pub is_complete: bool,
    pub solved_optimally: bool,
    pub selected: Option<PegId>,
    pub dragging: Option<Disk>,
    pub hint: Option<Move>,
    pub auto_solving: bool,
    pub speed: SolveSpeed,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Single-player game session.
///
/// All state is owned here and only changes through these methods. The
/// controller never blocks and never reads a timer of its own: hint expiry
/// takes an explicit `now`, and auto-solve advances one move per call to
/// [`GameController::auto_solve_step`].
///
/// # Example
///
/// ```rust
/// use hanoi_engine::core::PegId;
/// use hanoi_engine::game::GameController;
///
/// let mut game = GameController::with_disks(3).unwrap();
/// game.attempt_move(PegId::A, PegId::C).unwrap();
/// assert_eq!(game.move_count(), 1);
///
/// assert!(game.undo());
/// assert_eq!(game.move_count(), 0);
/// assert!(game.redo());
/// assert_eq!(game.move_count(), 1);
/// ```
#[derive(Debug)]
pub struct GameController {
    id: Uuid,
    config: GameConfig,
    board: Board,
    move_count: u64,
    history: MoveHistory,
    selected: Option<PegId>,
    dragging: Option<Disk>,
    hint: Option<Hint>,
    playback: Option<Playback>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl GameController {
    /// Start a session from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Start a session with default settings and `disk_count` disks.
    pub fn with_disks(disk_count: Disk) -> Result<Self, ConfigError> {
        Self::new(GameConfig {
            disk_count,
            ..GameConfig::default()
        })
    }

    fn build(config: GameConfig) -> Self {
        let board = Board::stacked_on(config.disk_count, START_PEG);
        Self {
            id: Uuid::new_v4(),
            history: MoveHistory::new(board.clone(), Utc::now()),
            board,
            config,
            move_count: 0,
            selected: None,
            dragging: None,
            hint: None,
            playback: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn disk_count(&self) -> Disk {
        self.config.disk_count
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn target(&self) -> PegId {
        self.config.target
    }

    /// `2^N - 1` for the current disk count.
    pub fn optimal_moves(&self) -> u64 {
        solver::optimal_move_count(self.config.disk_count)
    }

    /// All disks are on the target peg.
    pub fn is_complete(&self) -> bool {
        self.board.peg(self.config.target).len() == usize::from(self.config.disk_count)
    }

    /// Complete in exactly the optimal number of moves.
    pub fn solved_optimally(&self) -> bool {
        self.is_complete() && self.move_count == self.optimal_moves()
    }

    pub fn selected_peg(&self) -> Option<PegId> {
        self.selected
    }

    /// Disk currently being dragged.
    pub fn dragging(&self) -> Option<Disk> {
        self.dragging
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Auto-solve playback is armed and not cancelled.
    pub fn is_auto_solving(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| !p.token().is_cancelled())
    }

    pub fn can_undo(&self) -> bool {
        !self.is_auto_solving() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_auto_solving() && self.history.can_redo()
    }

    pub fn speed(&self) -> SolveSpeed {
        self.config.speed
    }

    pub fn set_speed(&mut self, speed: SolveSpeed) {
        debug!(game = %self.id, speed = speed.name(), "Speed changed");
        self.config.speed = speed;
    }

    /// Pause the scheduler should leave between playback steps.
    pub fn step_delay(&self) -> Duration {
        self.config.speed.delay()
    }

    /// Snapshot of the render surface at `now`.
    pub fn view(&self, now: DateTime<Utc>) -> GameView {
        GameView {
            board: self.board.clone(),
            disk_count: self.config.disk_count,
            move_count: self.move_count,
            optimal_moves: self.optimal_moves(),
            is_complete: self.is_complete(),
            solved_optimally: self.solved_optimally(),
            selected: self.selected,
            dragging: self.dragging,
            hint: self.active_hint(now).map(|h| h.suggested),
            auto_solving: self.is_auto_solving(),
            speed: self.config.speed,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Start over with `disk_count` disks on peg A.
    ///
    /// Cancels any running auto-solve and clears selection, drag and hint.
    #[instrument(skip(self), fields(game = %self.id))]
    pub fn reset(&mut self, disk_count: Disk) -> Result<(), ConfigError> {
        validate_disk_count(disk_count)?;
        self.cancel_playback();
        self.config.disk_count = disk_count;
        self.restore_initial();
        info!(disk_count, "Game reset");
        Ok(())
    }

    /// Reset with the current disk count.
    pub fn restart(&mut self) {
        self.cancel_playback();
        self.restore_initial();
        info!(game = %self.id, disk_count = self.config.disk_count, "Game restarted");
    }

    fn restore_initial(&mut self) {
        self.board = Board::stacked_on(self.config.disk_count, START_PEG);
        self.move_count = 0;
        self.history.reset(self.board.clone(), Utc::now());
        self.selected = None;
        self.dragging = None;
        self.hint = None;
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// A rejected move changes nothing and records no history.
    pub fn attempt_move(&mut self, from: PegId, to: PegId) -> Result<Move, MoveError> {
        self.prune_playback();
        let mv = Move::new(from, to);
        if self.is_auto_solving() {
            debug!(game = %self.id, %mv, "Move rejected during auto-solve");
            return Err(MoveError::AutoSolveActive);
        }
        match self.board.apply_move(mv) {
            Ok(disk) => {
                self.commit(mv);
                debug!(game = %self.id, %mv, disk, moves = self.move_count, "Move applied");
                Ok(mv)
            }
            Err(e) => {
                debug!(game = %self.id, %mv, reason = %e, "Move rejected");
                Err(e)
            }
        }
    }

    /// [`GameController::attempt_move`] with raw peg indices.
    pub fn attempt_move_indices(&mut self, from: usize, to: usize) -> Result<Move, GameError> {
        let from = PegId::try_from(from)?;
        let to = PegId::try_from(to)?;
        Ok(self.attempt_move(from, to)?)
    }

    /// Bookkeeping after a move has been applied to the board.
    fn commit(&mut self, mv: Move) {
        self.move_count += 1;
        self.history
            .record(self.board.clone(), self.move_count, Utc::now());
        self.hint = None;
        if self.is_complete() {
            info!(
                game = %self.id,
                last = %mv,
                moves = self.move_count,
                optimal = self.optimal_moves(),
                "Puzzle complete"
            );
        }
    }

    /// Click on `peg`.
    ///
    /// The first click selects a non-empty peg; the second click moves from
    /// the selected peg (or deselects it when the same peg is clicked) and
    /// always clears the selection. Ignored during auto-solve or a drag.
    pub fn select_peg(&mut self, peg: PegId) -> Selection {
        self.prune_playback();
        if self.is_auto_solving() || self.dragging.is_some() {
            return Selection::Ignored;
        }
        match self.selected.take() {
            None if self.board.top(peg).is_some() => {
                self.selected = Some(peg);
                Selection::Selected(peg)
            }
            None => Selection::Ignored,
            Some(from) if from == peg => Selection::Deselected,
            Some(from) => match self.attempt_move(from, peg) {
                Ok(mv) => Selection::Moved(mv),
                Err(e) => Selection::Rejected(e),
            },
        }
    }

    /// Pick up `disk` for dragging.
    ///
    /// Only a disk on top of some peg can be picked. Clears the selection.
    pub fn drag_start(&mut self, disk: Disk) -> bool {
        self.prune_playback();
        if self.is_auto_solving() || self.board.peg_with_top(disk).is_none() {
            return false;
        }
        self.selected = None;
        self.dragging = Some(disk);
        true
    }

    /// Abandon the current drag without moving.
    pub fn drag_end(&mut self) {
        self.dragging = None;
    }

    /// Drop the dragged disk on `peg`.
    ///
    /// Returns `None` if nothing was being dragged. The drag is cleared
    /// whether or not the move succeeds.
    pub fn drop_on(&mut self, peg: PegId) -> Option<Result<Move, MoveError>> {
        let disk = self.dragging.take()?;
        let from = self.board.peg_with_top(disk)?;
        Some(self.attempt_move(from, peg))
    }

    /// Whether the dragged disk may land on `peg`.
    ///
    /// `None` when nothing is being dragged.
    pub fn drop_validity(&self, peg: PegId) -> Option<bool> {
        let disk = self.dragging?;
        Some(self.board.top(peg).is_none_or(|top| disk < top))
    }

    /// Compute and show the next optimal move.
    ///
    /// Does nothing during auto-solve or once the puzzle is complete. A new
    /// hint replaces any previous one.
    pub fn request_hint(&mut self, now: DateTime<Utc>) -> Option<Move> {
        self.prune_playback();
        if self.is_auto_solving() || self.is_complete() {
            return None;
        }
        let suggested = solver::next_hint(&self.board, self.config.target)?;
        self.hint = Some(Hint::issue(suggested, now, self.config.hint_ttl));
        debug!(game = %self.id, hint = %suggested, "Hint issued");
        Some(suggested)
    }

    /// The hint, if one is still visible at `now`.
    pub fn active_hint(&self, now: DateTime<Utc>) -> Option<&Hint> {
        self.hint.as_ref().filter(|h| h.is_active(now))
    }

    /// Drop the hint if it has expired by `now`. Returns whether one was dropped.
    pub fn expire_hint(&mut self, now: DateTime<Utc>) -> bool {
        if self.hint.as_ref().is_some_and(|h| !h.is_active(now)) {
            self.hint = None;
            return true;
        }
        false
    }

    pub fn clear_hint(&mut self) {
        self.hint = None;
    }

    /// Reset the board and arm playback of the canonical solution.
    ///
    /// Any previous playback is cancelled. The returned token stops this
    /// playback when cancelled; the controller checks it before every step.
    #[instrument(skip(self), fields(game = %self.id))]
    pub fn start_auto_solve(&mut self, speed: SolveSpeed) -> CancelToken {
        self.cancel_playback();
        self.config.speed = speed;
        self.restore_initial();

        let moves = solver::solve(self.config.disk_count, START_PEG, self.config.target);
        info!(moves = moves.len(), speed = speed.name(), "Auto-solve started");

        let token = CancelToken::new();
        self.playback = Some(Playback::new(moves, token.clone()));
        token
    }

    /// Play the next auto-solve move.
    ///
    /// Meant to be called by the scheduler every [`GameController::step_delay`].
    pub fn auto_solve_step(&mut self) -> StepOutcome {
        let Some(playback) = self.playback.as_mut() else {
            return StepOutcome::Idle;
        };
        let outcome = playback.next_step();
        let (played, total) = (playback.played(), playback.total());

        match outcome {
            StepOutcome::Moved(mv) => match self.board.apply_move(mv) {
                Ok(disk) => {
                    self.commit(mv);
                    debug!(game = %self.id, %mv, disk, step = played, total, "Auto-solve step");
                    outcome
                }
                Err(e) => {
                    warn!(game = %self.id, %mv, reason = %e, "Auto-solve move rejected, stopping");
                    self.playback = None;
                    StepOutcome::Cancelled
                }
            },
            StepOutcome::Finished => {
                info!(game = %self.id, moves = self.move_count, "Auto-solve finished");
                self.playback = None;
                outcome
            }
            StepOutcome::Cancelled => {
                info!(game = %self.id, step = played, total, "Auto-solve cancelled");
                self.playback = None;
                outcome
            }
            StepOutcome::Idle => outcome,
        }
    }

    /// Stop a running auto-solve, leaving the board where playback left it.
    ///
    /// Returns whether a playback was running.
    pub fn stop_auto_solve(&mut self) -> bool {
        let running = self.is_auto_solving();
        if running {
            info!(game = %self.id, "Auto-solve stopped");
        }
        self.cancel_playback();
        running
    }

    fn cancel_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.token().cancel();
        }
    }

    /// Forget a playback whose token was cancelled from outside.
    fn prune_playback(&mut self) {
        if self
            .playback
            .as_ref()
            .is_some_and(|p| p.token().is_cancelled())
        {
            self.playback = None;
        }
    }

    /// Step back one history entry. Rejected during auto-solve.
    pub fn undo(&mut self) -> bool {
        self.prune_playback();
        if self.is_auto_solving() {
            return false;
        }
        let Some(entry) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(entry);
        debug!(game = %self.id, moves = self.move_count, "Undo");
        true
    }

    /// Step forward one history entry. Rejected during auto-solve.
    pub fn redo(&mut self) -> bool {
        self.prune_playback();
        if self.is_auto_solving() {
            return false;
        }
        let Some(entry) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(entry);
        debug!(game = %self.id, moves = self.move_count, "Redo");
        true
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.board = entry.board;
        self.move_count = entry.move_count;
        self.selected = None;
        self.hint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(disks: Disk) -> GameController {
        GameController::with_disks(disks).unwrap()
    }

    #[test]
    fn new_game_is_at_start() {
        let game = game(4);
        assert_eq!(game.board(), &Board::new(4));
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.optimal_moves(), 15);
        assert_eq!(game.history().len(), 1);
        assert!(!game.is_complete());
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }

    #[test]
    fn rejects_out_of_range_disk_counts() {
        assert!(GameController::with_disks(2).is_err());
        assert!(GameController::with_disks(13).is_err());

        let mut game = game(3);
        assert!(game.reset(0).is_err());
        assert_eq!(game.disk_count(), 3);
    }

    #[test]
    fn reset_restores_initial_board_and_history() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::C).unwrap();
        game.attempt_move(PegId::A, PegId::B).unwrap();

        game.reset(6).unwrap();

        assert_eq!(game.board().pegs(), &[vec![6, 5, 4, 3, 2, 1], vec![], vec![]]);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.optimal_moves(), 63);
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::C).unwrap();
        let board = game.board().clone();

        let result = game.attempt_move(PegId::A, PegId::C);

        assert_eq!(result, Err(MoveError::LargerOnSmaller { disk: 2, top: 1 }));
        assert_eq!(game.board(), &board);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn attempt_move_indices_validates_pegs() {
        let mut game = game(3);
        assert!(matches!(
            game.attempt_move_indices(0, 3),
            Err(GameError::Peg(_))
        ));
        assert!(matches!(
            game.attempt_move_indices(1, 0),
            Err(GameError::Move(MoveError::EmptySource(PegId::B)))
        ));
        assert_eq!(
            game.attempt_move_indices(0, 1).unwrap(),
            Move::new(PegId::A, PegId::B)
        );
    }

    #[test]
    fn redo_unavailable_after_fresh_move() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::C).unwrap();
        game.attempt_move(PegId::A, PegId::B).unwrap();
        assert!(game.undo());
        assert!(game.can_redo());

        game.attempt_move(PegId::C, PegId::B).unwrap();

        assert!(!game.can_redo());
        assert!(!game.redo());
    }

    #[test]
    fn undo_redo_restore_board_and_count() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::C).unwrap();
        let after_one = game.board().clone();
        game.attempt_move(PegId::A, PegId::B).unwrap();
        let after_two = game.board().clone();

        assert!(game.undo());
        assert_eq!(game.board(), &after_one);
        assert_eq!(game.move_count(), 1);

        assert!(game.redo());
        assert_eq!(game.board(), &after_two);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn undo_at_start_is_no_op() {
        let mut game = game(3);
        assert!(!game.undo());
        assert_eq!(game.board(), &Board::new(3));
    }

    #[test]
    fn click_selects_then_moves() {
        let mut game = game(3);

        assert_eq!(game.select_peg(PegId::A), Selection::Selected(PegId::A));
        assert_eq!(game.selected_peg(), Some(PegId::A));

        assert_eq!(
            game.select_peg(PegId::C),
            Selection::Moved(Move::new(PegId::A, PegId::C))
        );
        assert_eq!(game.selected_peg(), None);
        assert_eq!(game.board().top(PegId::C), Some(1));
    }

    #[test]
    fn click_on_empty_peg_without_selection_is_ignored() {
        let mut game = game(3);
        assert_eq!(game.select_peg(PegId::B), Selection::Ignored);
        assert_eq!(game.selected_peg(), None);
    }

    #[test]
    fn clicking_selected_peg_deselects() {
        let mut game = game(3);
        game.select_peg(PegId::A);
        assert_eq!(game.select_peg(PegId::A), Selection::Deselected);
        assert_eq!(game.selected_peg(), None);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn rejected_click_move_clears_selection() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::C).unwrap();

        game.select_peg(PegId::A);
        assert_eq!(
            game.select_peg(PegId::C),
            Selection::Rejected(MoveError::LargerOnSmaller { disk: 2, top: 1 })
        );
        assert_eq!(game.selected_peg(), None);
    }

    #[test]
    fn drag_and_drop_moves_disk() {
        let mut game = game(3);

        assert!(!game.drag_start(3));
        assert!(game.drag_start(1));
        assert_eq!(game.dragging(), Some(1));
        assert_eq!(game.drop_validity(PegId::B), Some(true));

        let result = game.drop_on(PegId::B);
        assert_eq!(result, Some(Ok(Move::new(PegId::A, PegId::B))));
        assert_eq!(game.dragging(), None);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn drop_validity_reports_illegal_target() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::C).unwrap();

        assert!(game.drag_start(2));
        assert_eq!(game.drop_validity(PegId::C), Some(false));
        assert_eq!(game.drop_validity(PegId::B), Some(true));

        let result = game.drop_on(PegId::C);
        assert!(matches!(result, Some(Err(MoveError::LargerOnSmaller { .. }))));
        assert_eq!(game.dragging(), None);
    }

    #[test]
    fn drop_without_drag_does_nothing() {
        let mut game = game(3);
        assert_eq!(game.drop_validity(PegId::B), None);
        assert_eq!(game.drop_on(PegId::B), None);
    }

    #[test]
    fn drag_start_clears_selection_and_blocks_clicks() {
        let mut game = game(3);
        game.select_peg(PegId::A);
        assert!(game.drag_start(1));
        assert_eq!(game.selected_peg(), None);
        assert_eq!(game.select_peg(PegId::B), Selection::Ignored);

        game.drag_end();
        assert_eq!(game.dragging(), None);
    }

    #[test]
    fn hint_expires_and_is_cleared_by_moves() {
        let mut game = game(3);
        let now = Utc::now();

        let hint = game.request_hint(now).unwrap();
        assert_eq!(hint, Move::new(PegId::A, PegId::C));
        assert!(game.active_hint(now).is_some());

        let later = now + chrono::Duration::seconds(3);
        assert!(game.active_hint(later).is_none());
        assert!(game.expire_hint(later));
        assert!(!game.expire_hint(later));

        game.request_hint(now).unwrap();
        game.attempt_move(PegId::A, PegId::B).unwrap();
        assert!(game.active_hint(now).is_none());
    }

    #[test]
    fn no_hint_when_complete() {
        let mut game = game(3);
        for mv in solver::solve(3, PegId::A, PegId::C) {
            game.attempt_move(mv.from, mv.to).unwrap();
        }
        assert!(game.is_complete());
        assert!(game.solved_optimally());
        assert_eq!(game.request_hint(Utc::now()), None);
    }

    #[test]
    fn following_hints_solves_optimally() {
        let mut game = game(5);
        let now = Utc::now();
        while !game.is_complete() {
            let hint = game.request_hint(now).unwrap();
            game.attempt_move(hint.from, hint.to).unwrap();
        }
        assert_eq!(game.move_count(), 31);
        assert!(game.solved_optimally());
    }

    #[test]
    fn auto_solve_plays_full_solution() {
        let mut game = game(3);
        game.attempt_move(PegId::A, PegId::B).unwrap();

        let _token = game.start_auto_solve(SolveSpeed::Fast);
        assert!(game.is_auto_solving());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), &Board::new(3));
        assert_eq!(game.step_delay(), Duration::from_millis(200));

        let mut steps = 0;
        while let StepOutcome::Moved(_) = game.auto_solve_step() {
            steps += 1;
        }

        assert_eq!(steps, 7);
        assert!(game.is_complete());
        assert!(!game.is_auto_solving());
        assert_eq!(game.auto_solve_step(), StepOutcome::Idle);
    }

    #[test]
    fn auto_solve_locks_manual_input() {
        let mut game = game(3);
        let _token = game.start_auto_solve(SolveSpeed::Medium);
        game.auto_solve_step();

        assert_eq!(
            game.attempt_move(PegId::A, PegId::B),
            Err(MoveError::AutoSolveActive)
        );
        assert!(!game.can_undo());
        assert!(!game.undo());
        assert!(!game.redo());
        assert_eq!(game.select_peg(PegId::A), Selection::Ignored);
        assert!(!game.drag_start(2));
        assert_eq!(game.request_hint(Utc::now()), None);
    }

    #[test]
    fn cancelled_token_stops_playback() {
        let mut game = game(4);
        let token = game.start_auto_solve(SolveSpeed::Fast);
        game.auto_solve_step();
        game.auto_solve_step();

        token.cancel();

        assert!(!game.is_auto_solving());
        assert_eq!(game.auto_solve_step(), StepOutcome::Cancelled);
        assert_eq!(game.move_count(), 2);
        assert!(game.can_undo());
    }

    #[test]
    fn stop_leaves_board_in_place() {
        let mut game = game(4);
        game.start_auto_solve(SolveSpeed::Fast);
        game.auto_solve_step();
        let board = game.board().clone();

        assert!(game.stop_auto_solve());
        assert!(!game.stop_auto_solve());
        assert_eq!(game.board(), &board);
        assert!(game.attempt_move(PegId::A, PegId::C).is_ok());
    }

    #[test]
    fn reset_cancels_auto_solve() {
        let mut game = game(3);
        let token = game.start_auto_solve(SolveSpeed::Slow);

        game.reset(5).unwrap();

        assert!(token.is_cancelled());
        assert!(!game.is_auto_solving());
        assert_eq!(game.auto_solve_step(), StepOutcome::Idle);
    }

    #[test]
    fn view_reflects_state() {
        let mut game = game(3);
        let now = Utc::now();
        game.attempt_move(PegId::A, PegId::C).unwrap();
        game.request_hint(now);

        let view = game.view(now);
        assert_eq!(view.move_count, 1);
        assert_eq!(view.optimal_moves, 7);
        assert_eq!(view.hint, Some(Move::new(PegId::A, PegId::B)));
        assert!(view.can_undo);
        assert!(!view.can_redo);
        assert!(!view.auto_solving);
    }
}
