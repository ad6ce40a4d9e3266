//! Revoked token storage in Redis.
//!
//! Each revoked token lives under its own key with a TTL equal to the token's
//! remaining lifetime, so the list prunes itself.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use ride_core::{DomainError, RepoResult, RevokedTokenRepository};

use crate::pool::{RedisPool, RedisPoolError};

/// Key prefix for revoked tokens
pub const REVOKED_TOKEN_PREFIX: &str = "revoked_token:";

/// Value stored under a revoked token key
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RevocationRecord {
    revoked_at: i64,
    expires_at: i64,
}

/// Redis-backed revocation list
#[derive(Clone)]
pub struct RedisRevokedTokenStore {
    pool: RedisPool,
}

impl RedisRevokedTokenStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn key(token: &str) -> String {
        format!("{REVOKED_TOKEN_PREFIX}{token}")
    }

    /// Seconds until `expires_at`, rounded up; `None` once it has passed
    fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u64> {
        let millis = (expires_at - now).num_milliseconds();
        (millis > 0).then(|| (millis as u64).div_ceil(1000))
    }
}

fn cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

#[async_trait]
impl RevokedTokenRepository for RedisRevokedTokenStore {
    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> RepoResult<()> {
        let now = Utc::now();
        let Some(ttl) = Self::remaining_ttl(expires_at, now) else {
            debug!("Token already expired, nothing to store");
            return Ok(());
        };

        let record = RevocationRecord {
            revoked_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
        };

        // NX keeps the first revocation; a repeat is a no-op
        self.pool
            .set_nx_ex(&Self::key(token), &record, ttl)
            .await
            .map_err(cache_error)?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn is_revoked(&self, token: &str) -> RepoResult<bool> {
        self.pool
            .exists(&Self::key(token))
            .await
            .map_err(cache_error)
    }

    async fn prune_expired(&self) -> RepoResult<u64> {
        // Redis expires the keys itself
        Ok(0)
    }
}
