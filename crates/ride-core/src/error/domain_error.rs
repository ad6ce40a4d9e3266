//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ActorKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{0} not found")]
    ActorNotFound(ActorKind),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Capacity must be between 1 and 5, got {0}")]
    CapacityOutOfRange(u8),

    #[error("Invalid vehicle type: {0}")]
    InvalidVehicleType(String),

    #[error("Invalid driver status: {0}")]
    InvalidDriverStatus(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists(ActorKind),

    #[error("Vehicle plate number already registered")]
    PlateNumberAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "ACTOR_NOT_FOUND",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::CapacityOutOfRange(_) => "CAPACITY_OUT_OF_RANGE",
            Self::InvalidVehicleType(_) => "INVALID_VEHICLE_TYPE",
            Self::InvalidDriverStatus(_) => "INVALID_DRIVER_STATUS",

            Self::EmailAlreadyExists(_) => "EMAIL_ALREADY_EXISTS",
            Self::PlateNumberAlreadyExists => "PLATE_NUMBER_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActorNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::CapacityOutOfRange(_)
                | Self::InvalidVehicleType(_)
                | Self::InvalidDriverStatus(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists(_) | Self::PlateNumberAlreadyExists
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ActorNotFound(ActorKind::Rider);
        assert_eq!(err.code(), "ACTOR_NOT_FOUND");

        let err = DomainError::CapacityOutOfRange(9);
        assert_eq!(err.code(), "CAPACITY_OUT_OF_RANGE");
    }

    #[test]
    fn test_conflict_message_is_generic() {
        assert_eq!(
            DomainError::EmailAlreadyExists(ActorKind::Rider).to_string(),
            DomainError::EmailAlreadyExists(ActorKind::Driver).to_string(),
        );
        assert!(DomainError::EmailAlreadyExists(ActorKind::Driver).is_conflict());
        assert!(DomainError::PlateNumberAlreadyExists.is_conflict());
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::ActorNotFound(ActorKind::Driver).is_not_found());
        assert!(DomainError::InvalidVehicleType("bus".into()).is_validation());
        assert!(!DomainError::DatabaseError("down".into()).is_validation());
        assert!(!DomainError::CacheError("down".into()).is_conflict());
    }
}
