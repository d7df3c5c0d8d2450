//! Ephemeral hints.

use crate::core::Move;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A suggested move with a display lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub suggested: Move,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Hint {
    /// Issue a hint at `now` that stays visible for `ttl`.
    pub fn issue(suggested: Move, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            suggested,
            issued_at: now,
            expires_at,
        }
    }

    /// Whether the hint should still be displayed at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PegId;

    #[test]
    fn hint_expires_after_ttl() {
        let now = Utc::now();
        let hint = Hint::issue(
            Move::new(PegId::A, PegId::C),
            now,
            Duration::from_secs(2),
        );

        assert!(hint.is_active(now));
        assert!(hint.is_active(now + chrono::Duration::milliseconds(1999)));
        assert!(!hint.is_active(now + chrono::Duration::seconds(2)));
    }

    #[test]
    fn huge_ttl_saturates() {
        let now = Utc::now();
        let hint = Hint::issue(Move::new(PegId::A, PegId::B), now, Duration::MAX);
        assert!(hint.is_active(now + chrono::Duration::days(365)));
    }
}
