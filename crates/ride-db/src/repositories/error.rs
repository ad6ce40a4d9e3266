//! Error handling utilities for repositories

use ride_core::{ActorKind, DomainError};
use sqlx::Error as SqlxError;

pub const RIDERS_EMAIL_KEY: &str = "riders_email_key";
pub const DRIVERS_EMAIL_KEY: &str = "drivers_email_key";
pub const DRIVERS_PLATE_KEY: &str = "drivers_vehicle_plate_number_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Translate a unique violation into the matching conflict, by constraint name
pub fn map_unique_violation(e: SqlxError, kind: ActorKind) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return conflict_for_constraint(db_err.constraint(), kind);
        }
    }
    map_db_error(e)
}

fn conflict_for_constraint(constraint: Option<&str>, kind: ActorKind) -> DomainError {
    match constraint {
        Some(DRIVERS_PLATE_KEY) => DomainError::PlateNumberAlreadyExists,
        Some(RIDERS_EMAIL_KEY | DRIVERS_EMAIL_KEY) | None => DomainError::EmailAlreadyExists(kind),
        Some(other) => DomainError::DatabaseError(format!("unique violation on {other}")),
    }
}
