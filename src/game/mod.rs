//! Game orchestration around the pure core.
//!
//! This module is the "imperative shell": it owns a session's mutable
//! state and exposes the operations a presentation layer invokes.
//!
//! # Key Concepts
//!
//! - **Controller**: owns the board, history, selection, drag and hint
//! - **Playback**: auto-solve as a step function plus a cancellation token
//! - **Gestures**: the click/drag capability front ends call into
//! - **Config**: disk count, speed preset, hint lifetime and target peg

mod config;
mod controller;
mod error;
mod gesture;
mod hint;
mod playback;

pub use config::{
    validate_disk_count, ConfigError, GameConfig, SolveSpeed, DEFAULT_DISK_COUNT,
    DEFAULT_HINT_TTL, DISK_COUNT_RANGE, START_PEG,
};
pub use controller::{GameController, GameView, Selection};
pub use error::GameError;
pub use gesture::Gestures;
pub use hint::Hint;
pub use playback::{CancelToken, StepOutcome};
