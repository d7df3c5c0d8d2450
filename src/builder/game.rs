//! Builder for constructing game sessions.

use crate::builder::error::BuildError;
use crate::core::{Disk, PegId};
use crate::game::{GameConfig, GameController, SolveSpeed};
use std::time::Duration;

/// Builder for constructing a [`GameController`] with a fluent API.
///
/// The disk count is required; everything else falls back to
/// [`GameConfig::default`].
pub struct GameBuilder {
    disk_count: Option<Disk>,
    speed: Option<SolveSpeed>,
    hint_ttl: Option<Duration>,
    target: Option<PegId>,
}

impl GameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            disk_count: None,
            speed: None,
            hint_ttl: None,
            target: None,
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            disk_count: Some(config.disk_count),
            speed: Some(config.speed),
            hint_ttl: Some(config.hint_ttl),
            target: Some(config.target),
        }
    }

    /// Set the number of disks (required).
    pub fn disk_count(mut self, disk_count: Disk) -> Self {
        self.disk_count = Some(disk_count);
        self
    }

    /// Set the auto-solve speed preset.
    pub fn speed(mut self, speed: SolveSpeed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set how long hints stay visible.
    pub fn hint_ttl(mut self, ttl: Duration) -> Self {
        self.hint_ttl = Some(ttl);
        self
    }

    /// Set the peg the disks must end up on.
    pub fn target(mut self, peg: PegId) -> Self {
        self.target = Some(peg);
        self
    }

    /// Assemble the configuration without starting a game.
    pub fn config(&self) -> Result<GameConfig, BuildError> {
        let defaults = GameConfig::default();
        let config = GameConfig {
            disk_count: self.disk_count.ok_or(BuildError::MissingDiskCount)?,
            speed: self.speed.unwrap_or(defaults.speed),
            hint_ttl: self.hint_ttl.unwrap_or(defaults.hint_ttl),
            target: self.target.unwrap_or(defaults.target),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the game.
    /// Returns an error if the disk count is missing or any setting is invalid.
    pub fn build(self) -> Result<GameController, BuildError> {
        let config = self.config()?;
        Ok(GameController::new(config)?)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
