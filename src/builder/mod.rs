//! Builder API for ergonomic game construction.
//!
//! This module provides a fluent builder for game sessions and the
//! `board!` macro for writing boards as literals.

pub mod error;
pub mod game;
pub mod macros;

pub use error::BuildError;
pub use game::GameBuilder;
