//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, `Normalize` and `Validate`.
//! Normalization runs first so the rules see exactly what gets stored.
//! Field names follow the public JSON contract (`plateNumber`, `vehicleType`).

use ride_core::{normalize_email, VehicleType};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Shared
// ============================================================================

/// Canonical form of a request: text fields trimmed, emails lowercased
///
/// Passwords are taken verbatim.
pub trait Normalize {
    #[must_use]
    fn normalize(self) -> Self;
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FullNameRequest {
    #[validate(length(min = 3, message = "First name must be at least 3 characters long"))]
    pub firstname: String,

    #[serde(default)]
    #[validate(length(min = 3, message = "Last name must be at least 3 characters long"))]
    pub lastname: Option<String>,
}

impl Normalize for FullNameRequest {
    fn normalize(self) -> Self {
        Self {
            firstname: trimmed(self.firstname),
            lastname: self.lastname.map(trimmed).filter(|l| !l.is_empty()),
        }
    }
}

/// Login request, identical for riders and drivers
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

impl Normalize for LoginRequest {
    fn normalize(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self
        }
    }
}

// ============================================================================
// Rider Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRiderRequest {
    #[validate(nested)]
    pub fullname: FullNameRequest,

    #[validate(email(message = "Invalid Email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

impl Normalize for RegisterRiderRequest {
    fn normalize(self) -> Self {
        Self {
            fullname: self.fullname.normalize(),
            email: normalize_email(&self.email),
            password: self.password,
        }
    }
}

// ============================================================================
// Driver Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    #[validate(length(min = 3, message = "Color must be at least 3 characters long"))]
    pub color: String,

    #[validate(length(min = 3, message = "Plate number must be at least 3 characters long"))]
    pub plate_number: String,

    #[validate(range(min = 1, max = 5, message = "Capacity must be between 1 and 5"))]
    pub capacity: u8,

    /// Unknown values fail JSON decoding
    pub vehicle_type: VehicleType,
}

impl Normalize for VehicleRequest {
    fn normalize(self) -> Self {
        Self {
            color: trimmed(self.color),
            plate_number: trimmed(self.plate_number),
            ..self
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterDriverRequest {
    #[validate(nested)]
    pub fullname: FullNameRequest,

    #[validate(email(message = "Invalid Email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    #[validate(nested)]
    pub vehicle: VehicleRequest,
}

impl Normalize for RegisterDriverRequest {
    fn normalize(self) -> Self {
        Self {
            fullname: self.fullname.normalize(),
            email: normalize_email(&self.email),
            password: self.password,
            vehicle: self.vehicle.normalize(),
        }
    }
}
