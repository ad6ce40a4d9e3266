//! Rider database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the riders table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct RiderModel {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rider row plus its password hash, read only for login
#[derive(Debug, Clone, FromRow)]
pub struct RiderCredentialsModel {
    #[sqlx(flatten)]
    pub rider: RiderModel,
    pub password_hash: String,
}
