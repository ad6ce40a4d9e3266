//! Database models - row shapes read with SQLx `FromRow`

mod driver;
mod rider;

pub use driver::{DriverCredentialsModel, DriverModel};
pub use rider::{RiderCredentialsModel, RiderModel};
