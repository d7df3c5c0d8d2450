//! Build errors for the game builder.

use crate::game::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Disk count not specified. Call .disk_count(n) before .build()")]
    MissingDiskCount,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
