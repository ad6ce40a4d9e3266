//! PostgreSQL implementation of the revocation list

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use ride_core::{RepoResult, RevokedTokenRepository};

use super::error::map_db_error;

/// Revoked tokens kept in the `revoked_tokens` table
#[derive(Clone)]
pub struct PgRevokedTokenRepository {
    pool: PgPool,
}

impl PgRevokedTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevokedTokenRepository for PgRevokedTokenRepository {
    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO revoked_tokens (token, revoked_at, expires_at)
            VALUES ($1, NOW(), $2)
            ON CONFLICT (token) DO NOTHING
            ",
        )
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn is_revoked(&self, token: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token = $1)")
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn prune_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
