//! # ride-db
//!
//! Database layer implementing the ride-core repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management and runtime migrations
//! - Row models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - Repository implementations for riders, drivers and the revocation list
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ride_db::{create_pool, run_migrations, PgRiderRepository, PoolConfig};
//!
//! async fn example(config: &ride_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     run_migrations(&pool, &config.database.migrations_dir).await?;
//!     let riders = PgRiderRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod health;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use health::PgHealthCheck;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgDriverRepository, PgRevokedTokenRepository, PgRiderRepository};
