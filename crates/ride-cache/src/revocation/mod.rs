//! Token revocation list stored in Redis

mod revoked_token;

pub use revoked_token::{RedisRevokedTokenStore, REVOKED_TOKEN_PREFIX};
