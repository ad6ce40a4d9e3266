//! In-memory repository implementations for service and HTTP tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::entities::{Actor, Driver, RevokedToken, Rider};
use crate::error::DomainError;
use crate::traits::{ActorRepository, Credentials, HealthCheck, RepoResult, RevokedTokenRepository};
use crate::value_objects::ActorId;

struct Row<A> {
    actor: A,
    password_hash: String,
}

/// Actor store backed by a mutex-guarded map
///
/// The uniqueness check and the insert happen under one lock, mirroring the
/// unique constraints of the SQL schema.
pub struct InMemoryActorRepository<A> {
    rows: Mutex<HashMap<ActorId, Row<A>>>,
}

impl<A> Default for InMemoryActorRepository<A> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

impl<A: Actor> InMemoryActorRepository<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }

    /// Remove an actor, simulating an account deleted out from under its tokens
    pub fn remove(&self, id: ActorId) -> bool {
        self.rows.lock().remove(&id).is_some()
    }

    /// Stored hash for an actor, for asserting it is never the plaintext
    pub fn password_hash_of(&self, email: &str) -> Option<String> {
        self.rows
            .lock()
            .values()
            .find(|row| row.actor.email() == email)
            .map(|row| row.password_hash.clone())
    }
}

/// Per-kind uniqueness rules beyond the email
pub trait UniqueFields {
    fn conflicts_with(&self, other: &Self) -> Option<DomainError>;
}

impl UniqueFields for Rider {
    fn conflicts_with(&self, _other: &Self) -> Option<DomainError> {
        None
    }
}

impl UniqueFields for Driver {
    fn conflicts_with(&self, other: &Self) -> Option<DomainError> {
        (self.vehicle.plate_number == other.vehicle.plate_number)
            .then_some(DomainError::PlateNumberAlreadyExists)
    }
}

#[async_trait]
impl<A: Actor + UniqueFields> ActorRepository<A> for InMemoryActorRepository<A> {
    async fn find_by_id(&self, id: ActorId) -> RepoResult<Option<A>> {
        Ok(self.rows.lock().get(&id).map(|row| row.actor.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<A>> {
        Ok(self
            .rows
            .lock()
            .values()
            .find(|row| row.actor.email() == email)
            .map(|row| row.actor.clone()))
    }

    async fn find_credentials_by_email(&self, email: &str) -> RepoResult<Option<Credentials<A>>> {
        Ok(self
            .rows
            .lock()
            .values()
            .find(|row| row.actor.email() == email)
            .map(|row| Credentials {
                actor: row.actor.clone(),
                password_hash: row.password_hash.clone(),
            }))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.rows.lock().values().any(|row| row.actor.email() == email))
    }

    async fn create(&self, actor: &A, password_hash: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock();

        for row in rows.values() {
            if row.actor.email() == actor.email() {
                return Err(DomainError::EmailAlreadyExists(A::KIND));
            }
            if let Some(err) = actor.conflicts_with(&row.actor) {
                return Err(err);
            }
        }

        rows.insert(
            actor.id(),
            Row {
                actor: actor.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(())
    }
}

/// Revocation list backed by a mutex-guarded map
#[derive(Default)]
pub struct InMemoryRevokedTokenRepository {
    entries: Mutex<HashMap<String, RevokedToken>>,
    fail: AtomicBool,
}

impl InMemoryRevokedTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Make every subsequent call fail, simulating an unreachable store
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "revocation store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RevokedTokenRepository for InMemoryRevokedTokenRepository {
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>) -> RepoResult<()> {
        self.check_available()?;
        self.entries
            .lock()
            .entry(token.to_string())
            .or_insert_with(|| RevokedToken::new(token, expires_at));
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.entries.lock().contains_key(token))
    }

    async fn prune_expired(&self) -> RepoResult<u64> {
        self.check_available()?;
        let now = Utc::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_prunable(now));
        Ok((before - entries.len()) as u64)
    }
}

#[async_trait]
impl HealthCheck for InMemoryRevokedTokenRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> bool {
        !self.fail.load(Ordering::SeqCst)
    }
}
