//! Hanoi Engine: a pure puzzle-state engine for Tower of Hanoi
//!
//! The engine follows a "pure core, imperative shell" layout. The core
//! (board, move rules, history, solver) is made of plain values and pure
//! functions; the game controller owns a session's mutable state and is the
//! only thing a presentation layer talks to.
//!
//! # Core Concepts
//!
//! - **Board**: three pegs holding `N` distinct disks, always valid
//! - **Moves**: top-disk relocations, rejected without side effects when illegal
//! - **History**: linear undo/redo log of board snapshots
//! - **Solver**: the canonical `2^N - 1` solution and optimal hints from any
//!   reachable board
//! - **Controller**: selection, drag-and-drop, hints and auto-solve playback
//!
//! # Example
//!
//! ```rust
//! use hanoi_engine::core::PegId;
//! use hanoi_engine::game::{GameController, SolveSpeed, StepOutcome};
//! use chrono::Utc;
//!
//! let mut game = GameController::with_disks(3).unwrap();
//!
//! let hint = game.request_hint(Utc::now()).unwrap();
//! assert_eq!((hint.from, hint.to), (PegId::A, PegId::C));
//! game.attempt_move(hint.from, hint.to).unwrap();
//!
//! game.start_auto_solve(SolveSpeed::Fast);
//! while let StepOutcome::Moved(_) = game.auto_solve_step() {}
//! assert!(game.is_complete());
//! assert_eq!(game.move_count(), game.optimal_moves());
//! ```

pub mod builder;
pub mod core;
pub mod game;
pub mod solver;

// Re-export commonly used types
pub use builder::GameBuilder;
pub use core::{Board, Move, MoveError, MoveHistory, PegId};
pub use game::{GameConfig, GameController, Gestures, SolveSpeed, StepOutcome};
