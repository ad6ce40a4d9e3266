//! Entity to DTO mappers

use ride_core::{Driver, Rider, Vehicle};

use super::responses::{DriverResponse, RiderResponse, VehicleResponse};

impl From<&Rider> for RiderResponse {
    fn from(rider: &Rider) -> Self {
        Self {
            id: rider.id.to_string(),
            fullname: rider.fullname.clone(),
            email: rider.email.clone(),
            location: rider.location,
            created_at: rider.created_at,
        }
    }
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            color: vehicle.color.clone(),
            plate_number: vehicle.plate_number.clone(),
            capacity: vehicle.capacity,
            vehicle_type: vehicle.vehicle_type,
        }
    }
}

impl From<&Driver> for DriverResponse {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id.to_string(),
            fullname: driver.fullname.clone(),
            email: driver.email.clone(),
            socket_id: driver.socket_id.clone(),
            status: driver.status,
            vehicle: VehicleResponse::from(&driver.vehicle),
            location: driver.location,
            created_at: driver.created_at,
        }
    }
}
