//! Business logic services
//!
//! Account flows, the auth gate, readiness reporting and the revocation sweeper.

pub mod account;
pub mod context;
pub mod error;
pub mod gate;
pub mod health;
pub mod sweeper;

pub use account::{AccountActor, AccountService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use gate::{AuthGate, GateRejection};
pub use health::HealthService;
pub use sweeper::RevocationSweeper;
