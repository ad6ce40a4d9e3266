//! Revoked token - an entry in the logout blacklist

use chrono::{DateTime, Utc};

/// A token that must be rejected even though its signature still verifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokedToken {
    pub token: String,
    pub revoked_at: DateTime<Utc>,
    /// Natural expiry of the token; the entry is useless afterwards
    pub expires_at: DateTime<Utc>,
}

impl RevokedToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            revoked_at: Utc::now(),
            expires_at,
        }
    }

    /// Whether the underlying token has expired on its own
    #[inline]
    pub fn is_prunable(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
