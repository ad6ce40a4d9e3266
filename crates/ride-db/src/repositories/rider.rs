//! PostgreSQL implementation of the rider repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ride_core::{ActorId, ActorKind, ActorRepository, Credentials, RepoResult, Rider};

use crate::mappers::RiderInsert;
use crate::models::{RiderCredentialsModel, RiderModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of the rider store
#[derive(Clone)]
pub struct PgRiderRepository {
    pool: PgPool,
}

impl PgRiderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActorRepository<Rider> for PgRiderRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ActorId) -> RepoResult<Option<Rider>> {
        let result = sqlx::query_as::<_, RiderModel>(
            r"
            SELECT id, first_name, last_name, email, location_lat, location_lng,
                   created_at, updated_at
            FROM riders
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Rider::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Rider>> {
        let result = sqlx::query_as::<_, RiderModel>(
            r"
            SELECT id, first_name, last_name, email, location_lat, location_lng,
                   created_at, updated_at
            FROM riders
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Rider::from))
    }

    #[instrument(skip(self))]
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> RepoResult<Option<Credentials<Rider>>> {
        let result = sqlx::query_as::<_, RiderCredentialsModel>(
            r"
            SELECT id, first_name, last_name, email, password_hash, location_lat, location_lng,
                   created_at, updated_at
            FROM riders
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|row| Credentials {
            actor: Rider::from(row.rider),
            password_hash: row.password_hash,
        }))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM riders WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, rider, password_hash), fields(rider_id = %rider.id))]
    async fn create(&self, rider: &Rider, password_hash: &str) -> RepoResult<()> {
        let row = RiderInsert::new(rider, password_hash);

        sqlx::query(
            r"
            INSERT INTO riders (id, first_name, last_name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(row.id)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.email)
        .bind(row.password_hash)
        .bind(rider.created_at)
        .bind(rider.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, ActorKind::Rider))?;

        Ok(())
    }
}
