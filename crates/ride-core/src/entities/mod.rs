//! Domain entities - core business objects

mod actor;
mod driver;
mod revoked_token;
mod rider;

pub use actor::{normalize_email, Actor, FullName, Location};
pub use driver::{Driver, DriverStatus, Vehicle, VehicleType};
pub use revoked_token::RevokedToken;
pub use rider::Rider;
