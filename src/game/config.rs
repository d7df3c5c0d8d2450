//! Game configuration.

use crate::core::{Disk, PegId};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Disk counts a game can be reset to.
pub const DISK_COUNT_RANGE: RangeInclusive<Disk> = 3..=12;

/// Disk count of a fresh game.
pub const DEFAULT_DISK_COUNT: Disk = 4;

/// How long a hint stays visible.
pub const DEFAULT_HINT_TTL: Duration = Duration::from_millis(2000);

/// Peg holding the full stack on a fresh board.
pub const START_PEG: PegId = PegId::A;

/// Auto-solve playback speed presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl SolveSpeed {
    pub const ALL: [SolveSpeed; 3] = [Self::Slow, Self::Medium, Self::Fast];

    /// Pause between two playback steps.
    pub fn delay(self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(800),
            Self::Medium => Duration::from_millis(500),
            Self::Fast => Duration::from_millis(200),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

impl std::str::FromStr for SolveSpeed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownSpeed(s.to_string()))
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Disk count {0} is outside the supported range 3..=12")]
    DiskCountOutOfRange(Disk),

    #[error("Hint lifetime must be greater than zero")]
    ZeroHintTtl,

    #[error("Target peg {0} is the peg every game starts on")]
    TargetIsStartPeg(PegId),

    #[error("Unknown solve speed '{0}' (expected slow, medium or fast)")]
    UnknownSpeed(String),

    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a game session.
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Example
///
/// ```rust
/// use hanoi_engine::game::{GameConfig, SolveSpeed};
///
/// let config = GameConfig::from_json(r#"{ "disk_count": 6, "speed": "fast" }"#).unwrap();
/// assert_eq!(config.disk_count, 6);
/// assert_eq!(config.speed, SolveSpeed::Fast);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Disks on a freshly reset board
    pub disk_count: Disk,
    /// Auto-solve playback speed
    pub speed: SolveSpeed,
    /// Hint display lifetime
    #[serde(rename = "hint_ttl_ms", with = "millis")]
    pub hint_ttl: Duration,
    /// Peg the disks must end up on
    pub target: PegId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISK_COUNT,
            speed: SolveSpeed::default(),
            hint_ttl: DEFAULT_HINT_TTL,
            target: PegId::C,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_disk_count(self.disk_count)?;
        if self.hint_ttl.is_zero() {
            return Err(ConfigError::ZeroHintTtl);
        }
        if self.target == START_PEG {
            return Err(ConfigError::TargetIsStartPeg(self.target));
        }
        Ok(())
    }
}

/// Check that `disk_count` is one of the supported sizes.
pub fn validate_disk_count(disk_count: Disk) -> Result<(), ConfigError> {
    if DISK_COUNT_RANGE.contains(&disk_count) {
        Ok(())
    } else {
        Err(ConfigError::DiskCountOutOfRange(disk_count))
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
