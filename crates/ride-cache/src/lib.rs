//! # ride-cache
//!
//! Redis layer holding the token revocation list.
//!
//! Entries expire in Redis together with the token they block, so the list
//! never needs an explicit sweep.
//!
//! ## Example
//!
//! ```ignore
//! use ride_cache::{RedisPool, RedisPoolConfig, RedisRevokedTokenStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let store = RedisRevokedTokenStore::new(pool.clone());
//! store.revoke(&token, claims.expires_at()).await?;
//! ```

pub mod pool;
pub mod revocation;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

pub use revocation::{RedisRevokedTokenStore, REVOKED_TOKEN_PREFIX};
