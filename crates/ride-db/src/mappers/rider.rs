//! Rider entity <-> model mapper

use ride_core::{ActorId, FullName, Location, Rider};
use uuid::Uuid;

use crate::models::RiderModel;

impl From<RiderModel> for Rider {
    fn from(model: RiderModel) -> Self {
        Rider {
            id: ActorId::from_uuid(model.id),
            fullname: FullName::new(model.first_name, model.last_name),
            email: model.email,
            location: Location::from_parts(model.location_lat, model.location_lng),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values for inserting a rider
pub struct RiderInsert<'a> {
    pub id: Uuid,
    pub first_name: &'a str,
    pub last_name: Option<&'a str>,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> RiderInsert<'a> {
    pub fn new(rider: &'a Rider, password_hash: &'a str) -> Self {
        Self {
            id: rider.id.into_inner(),
            first_name: &rider.fullname.firstname,
            last_name: rider.fullname.lastname.as_deref(),
            email: &rider.email,
            password_hash,
        }
    }
}
