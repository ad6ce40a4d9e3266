//! Driver database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the drivers table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct DriverModel {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub socket_id: Option<String>,
    pub status: String,
    pub vehicle_color: String,
    pub vehicle_plate_number: String,
    pub vehicle_capacity: i16,
    pub vehicle_type: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Driver row plus its password hash, read only for login
#[derive(Debug, Clone, FromRow)]
pub struct DriverCredentialsModel {
    #[sqlx(flatten)]
    pub driver: DriverModel,
    pub password_hash: String,
}
