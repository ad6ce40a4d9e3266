//! PostgreSQL implementation of the driver repository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ride_core::{ActorId, ActorKind, ActorRepository, Credentials, Driver, RepoResult};

use crate::mappers::DriverInsert;
use crate::models::{DriverCredentialsModel, DriverModel};

use super::error::{map_db_error, map_unique_violation};

const DRIVER_COLUMNS: &str = "id, first_name, last_name, email, socket_id, status, \
    vehicle_color, vehicle_plate_number, vehicle_capacity, vehicle_type, \
    location_lat, location_lng, created_at, updated_at";

/// PostgreSQL implementation of the driver store
#[derive(Clone)]
pub struct PgDriverRepository {
    pool: PgPool,
}

impl PgDriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActorRepository<Driver> for PgDriverRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ActorId) -> RepoResult<Option<Driver>> {
        let sql = format!("SELECT {DRIVER_COLUMNS} FROM drivers WHERE id = $1");
        let result = sqlx::query_as::<_, DriverModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Driver::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Driver>> {
        let sql = format!("SELECT {DRIVER_COLUMNS} FROM drivers WHERE email = $1");
        let result = sqlx::query_as::<_, DriverModel>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Driver::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> RepoResult<Option<Credentials<Driver>>> {
        let sql = format!("SELECT {DRIVER_COLUMNS}, password_hash FROM drivers WHERE email = $1");
        let result = sqlx::query_as::<_, DriverCredentialsModel>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result
            .map(|row| {
                Ok(Credentials {
                    actor: Driver::try_from(row.driver)?,
                    password_hash: row.password_hash,
                })
            })
            .transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM drivers WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, driver, password_hash), fields(driver_id = %driver.id))]
    async fn create(&self, driver: &Driver, password_hash: &str) -> RepoResult<()> {
        let row = DriverInsert::new(driver, password_hash);

        sqlx::query(
            r"
            INSERT INTO drivers (id, first_name, last_name, email, password_hash, status,
                                 vehicle_color, vehicle_plate_number, vehicle_capacity, vehicle_type,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(row.id)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.email)
        .bind(row.password_hash)
        .bind(row.status)
        .bind(row.vehicle_color)
        .bind(row.vehicle_plate_number)
        .bind(row.vehicle_capacity)
        .bind(row.vehicle_type)
        .bind(driver.created_at)
        .bind(driver.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, ActorKind::Driver))?;

        Ok(())
    }
}
