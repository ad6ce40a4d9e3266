//! Driver entity - an account that offers rides with a registered vehicle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::actor::{normalize_email, Actor, FullName, Location};
use crate::error::DomainError;
use crate::value_objects::{ActorId, ActorKind};

/// Closed set of vehicle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorbike,
    Auto,
}

impl VehicleType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorbike => "motorbike",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "motorbike" => Ok(Self::Motorbike),
            "auto" => Ok(Self::Auto),
            other => Err(DomainError::InvalidVehicleType(other.to_string())),
        }
    }
}

/// Driver availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    #[default]
    Inactive,
}

impl DriverStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for DriverStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(DomainError::InvalidDriverStatus(other.to_string())),
        }
    }
}

/// Vehicle registered to a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub color: String,
    pub plate_number: String,
    pub capacity: u8,
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    pub const MIN_CAPACITY: u8 = 1;
    pub const MAX_CAPACITY: u8 = 5;

    /// Build a vehicle, enforcing the passenger capacity bounds
    ///
    /// # Errors
    /// Returns `DomainError::CapacityOutOfRange` when capacity is outside 1..=5
    pub fn new(
        color: impl Into<String>,
        plate_number: &str,
        capacity: u8,
        vehicle_type: VehicleType,
    ) -> Result<Self, DomainError> {
        if !(Self::MIN_CAPACITY..=Self::MAX_CAPACITY).contains(&capacity) {
            return Err(DomainError::CapacityOutOfRange(capacity));
        }

        Ok(Self {
            color: color.into(),
            plate_number: plate_number.trim().to_string(),
            capacity,
            vehicle_type,
        })
    }
}

/// Driver account (exposed on the wire as "captain")
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: ActorId,
    pub fullname: FullName,
    pub email: String,
    pub vehicle: Vehicle,
    pub status: DriverStatus,
    pub socket_id: Option<String>,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    /// Create a new, inactive Driver; the email is normalized
    pub fn new(id: ActorId, fullname: FullName, email: &str, vehicle: Vehicle) -> Self {
        let now = Utc::now();
        Self {
            id,
            fullname,
            email: normalize_email(email),
            vehicle,
            status: DriverStatus::default(),
            socket_id: None,
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == DriverStatus::Active
    }
}

impl Actor for Driver {
    const KIND: ActorKind = ActorKind::Driver;

    fn id(&self) -> ActorId {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn fullname(&self) -> &FullName {
        &self.fullname
    }
}
