//! Driver entity <-> model mapper

use ride_core::{ActorId, DomainError, Driver, FullName, Location, Vehicle};
use uuid::Uuid;

use crate::models::DriverModel;

/// Text columns are constrained by CHECKs, but a bad row still surfaces as an error
impl TryFrom<DriverModel> for Driver {
    type Error = DomainError;

    fn try_from(model: DriverModel) -> Result<Self, Self::Error> {
        let capacity = u8::try_from(model.vehicle_capacity).map_err(|_| {
            DomainError::InternalError(format!(
                "driver {} has capacity {}",
                model.id, model.vehicle_capacity
            ))
        })?;

        Ok(Driver {
            id: ActorId::from_uuid(model.id),
            fullname: FullName::new(model.first_name, model.last_name),
            email: model.email,
            vehicle: Vehicle::new(
                model.vehicle_color,
                &model.vehicle_plate_number,
                capacity,
                model.vehicle_type.parse()?,
            )?,
            status: model.status.parse()?,
            socket_id: model.socket_id,
            location: Location::from_parts(model.location_lat, model.location_lng),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for inserting a driver
pub struct DriverInsert<'a> {
    pub id: Uuid,
    pub first_name: &'a str,
    pub last_name: Option<&'a str>,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub status: &'static str,
    pub vehicle_color: &'a str,
    pub vehicle_plate_number: &'a str,
    pub vehicle_capacity: i16,
    pub vehicle_type: &'static str,
}

impl<'a> DriverInsert<'a> {
    pub fn new(driver: &'a Driver, password_hash: &'a str) -> Self {
        Self {
            id: driver.id.into_inner(),
            first_name: &driver.fullname.firstname,
            last_name: driver.fullname.lastname.as_deref(),
            email: &driver.email,
            password_hash,
            status: driver.status.as_str(),
            vehicle_color: &driver.vehicle.color,
            vehicle_plate_number: &driver.vehicle.plate_number,
            vehicle_capacity: i16::from(driver.vehicle.capacity),
            vehicle_type: driver.vehicle.vehicle_type.as_str(),
        }
    }
}
