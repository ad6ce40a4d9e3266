//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in ride-core.

mod driver;
mod error;
mod revoked_token;
mod rider;

pub use driver::PgDriverRepository;
pub use revoked_token::PgRevokedTokenRepository;
pub use rider::PgRiderRepository;
