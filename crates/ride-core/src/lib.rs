//! # ride-core
//!
//! Domain layer containing actor entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_email, Actor, Driver, DriverStatus, FullName, Location, RevokedToken, Rider,
    Vehicle, VehicleType,
};
pub use error::DomainError;
pub use traits::{
    ActorRepository, Credentials, DriverRepository, HealthCheck, RepoResult,
    RevokedTokenRepository, RiderRepository,
};
pub use value_objects::{ActorId, ActorIdParseError, ActorKind};
