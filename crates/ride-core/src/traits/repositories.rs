//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Riders and drivers share one generic
//! repository contract; each store keeps its own identity space.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Actor, Driver, Rider};
use crate::error::DomainError;
use crate::value_objects::ActorId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// An actor together with its stored password hash
///
/// Only produced by [`ActorRepository::find_credentials_by_email`]; every other
/// lookup leaves the hash behind.
#[derive(Debug, Clone)]
pub struct Credentials<A> {
    pub actor: A,
    pub password_hash: String,
}

// ============================================================================
// Actor Repository
// ============================================================================

#[async_trait]
pub trait ActorRepository<A: Actor>: Send + Sync {
    /// Find actor by ID
    async fn find_by_id(&self, id: ActorId) -> RepoResult<Option<A>>;

    /// Find actor by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<A>>;

    /// Find actor by email, including the password hash
    async fn find_credentials_by_email(&self, email: &str) -> RepoResult<Option<Credentials<A>>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new actor
    ///
    /// Uniqueness is enforced here, atomically: a concurrent duplicate gets
    /// `EmailAlreadyExists` (or `PlateNumberAlreadyExists` for drivers).
    async fn create(&self, actor: &A, password_hash: &str) -> RepoResult<()>;
}

/// Rider store
pub type RiderRepository = dyn ActorRepository<Rider>;

/// Driver store
pub type DriverRepository = dyn ActorRepository<Driver>;

// ============================================================================
// Revoked Token Repository
// ============================================================================

#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    /// Add a token to the revoked set; revoking twice is a no-op
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> RepoResult<()>;

    /// Point lookup
    async fn is_revoked(&self, token: &str) -> RepoResult<bool>;

    /// Drop entries whose token has expired anyway, returning how many went
    async fn prune_expired(&self) -> RepoResult<u64>;
}
