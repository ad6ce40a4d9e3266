//! Service context - dependency container for services
//!
//! Holds the stores, the token and password services, and the readiness probes.

use std::sync::Arc;

use ride_common::{PasswordService, TokenService};
use ride_core::{DriverRepository, HealthCheck, RevokedTokenRepository, RiderRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`. Riders and drivers
/// live in separate stores, so their identity spaces never mix.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    rider_repo: Arc<RiderRepository>,
    driver_repo: Arc<DriverRepository>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,

    // Services
    token_service: Arc<TokenService>,
    password_service: PasswordService,

    // Readiness probes
    health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn rider_repo(&self) -> &RiderRepository {
        self.rider_repo.as_ref()
    }

    pub fn driver_repo(&self) -> &DriverRepository {
        self.driver_repo.as_ref()
    }

    pub fn revoked_tokens(&self) -> &dyn RevokedTokenRepository {
        self.revoked_tokens.as_ref()
    }

    /// Shared handle, for background tasks outliving a request
    pub fn revoked_tokens_handle(&self) -> Arc<dyn RevokedTokenRepository> {
        Arc::clone(&self.revoked_tokens)
    }

    // === Services ===

    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    pub fn health_checks(&self) -> &[Arc<dyn HealthCheck>] {
        &self.health_checks
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("token_service", &self.token_service)
            .field(
                "health_checks",
                &self.health_checks.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    rider_repo: Option<Arc<RiderRepository>>,
    driver_repo: Option<Arc<DriverRepository>>,
    revoked_tokens: Option<Arc<dyn RevokedTokenRepository>>,
    token_service: Option<Arc<TokenService>>,
    password_service: Option<PasswordService>,
    health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rider_repo(mut self, repo: Arc<RiderRepository>) -> Self {
        self.rider_repo = Some(repo);
        self
    }

    pub fn driver_repo(mut self, repo: Arc<DriverRepository>) -> Self {
        self.driver_repo = Some(repo);
        self
    }

    pub fn revoked_tokens(mut self, repo: Arc<dyn RevokedTokenRepository>) -> Self {
        self.revoked_tokens = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            rider_repo: self
                .rider_repo
                .ok_or_else(|| ServiceError::validation("rider_repo is required"))?,
            driver_repo: self
                .driver_repo
                .ok_or_else(|| ServiceError::validation("driver_repo is required"))?,
            revoked_tokens: self
                .revoked_tokens
                .ok_or_else(|| ServiceError::validation("revoked_tokens is required"))?,
            token_service: self
                .token_service
                .ok_or_else(|| ServiceError::validation("token_service is required"))?,
            password_service: self.password_service.unwrap_or_default(),
            health_checks: self.health_checks,
        })
    }
}
