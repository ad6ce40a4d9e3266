//! Ports implemented by the infrastructure crates

mod health;
mod repositories;

pub use health::HealthCheck;
pub use repositories::{
    ActorRepository, Credentials, DriverRepository, RepoResult, RevokedTokenRepository,
    RiderRepository,
};
