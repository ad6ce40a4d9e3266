//! Entity <-> model mappers

mod driver;
mod rider;

pub use driver::DriverInsert;
pub use rider::RiderInsert;
