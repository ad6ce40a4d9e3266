//! Account service
//!
//! Registration, login, logout and profile for both actor kinds. The flows
//! are written once, generic over [`AccountActor`].

use ride_core::{Actor, ActorId, ActorRepository, DomainError, Driver, FullName, Rider, Vehicle};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{
    ActorView, AuthResponse, DriverResponse, LoginRequest, MessageResponse, Normalize,
    ProfileResponse, RegisterDriverRequest, RegisterRiderRequest, RiderResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// An actor kind with its own store and public view
pub trait AccountActor: Actor {
    /// Public projection returned to clients
    type View: ActorView + for<'x> From<&'x Self>;

    /// Human label used in response messages
    const LABEL: &'static str;

    fn repository(ctx: &ServiceContext) -> &dyn ActorRepository<Self>;
}

impl AccountActor for Rider {
    type View = RiderResponse;
    const LABEL: &'static str = "User";

    fn repository(ctx: &ServiceContext) -> &dyn ActorRepository<Self> {
        ctx.rider_repo()
    }
}

impl AccountActor for Driver {
    type View = DriverResponse;
    const LABEL: &'static str = "Captain";

    fn repository(ctx: &ServiceContext) -> &dyn ActorRepository<Self> {
        ctx.driver_repo()
    }
}

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a rider
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_rider(
        &self,
        request: RegisterRiderRequest,
    ) -> ServiceResult<AuthResponse<RiderResponse>> {
        let request = request.normalize();
        request.validate()?;

        let rider = Rider::new(
            ActorId::generate(),
            FullName::new(request.fullname.firstname, request.fullname.lastname),
            &request.email,
        );

        self.register(rider, &request.password).await
    }

    /// Register a driver together with their vehicle
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_driver(
        &self,
        request: RegisterDriverRequest,
    ) -> ServiceResult<AuthResponse<DriverResponse>> {
        let request = request.normalize();
        request.validate()?;

        let vehicle = Vehicle::new(
            request.vehicle.color,
            &request.vehicle.plate_number,
            request.vehicle.capacity,
            request.vehicle.vehicle_type,
        )?;

        let driver = Driver::new(
            ActorId::generate(),
            FullName::new(request.fullname.firstname, request.fullname.lastname),
            &request.email,
            vehicle,
        );

        self.register(driver, &request.password).await
    }

    async fn register<A: AccountActor>(
        &self,
        actor: A,
        password: &str,
    ) -> ServiceResult<AuthResponse<A::View>> {
        let repo = A::repository(self.ctx);

        // Fast path; the store's unique constraint settles races
        if repo.email_exists(actor.email()).await? {
            return Err(DomainError::EmailAlreadyExists(A::KIND).into());
        }

        let password_hash = self.ctx.password_service().hash(password)?;
        repo.create(&actor, &password_hash).await?;

        info!(kind = %A::KIND, actor_id = %actor.id(), "Account registered");

        self.respond(&actor, format!("{} registered successfully", A::LABEL))
    }

    /// Log in with email and password
    ///
    /// Unknown email and wrong password fail identically, and both pay for
    /// one password verification.
    #[instrument(skip(self, request), fields(kind = %A::KIND))]
    pub async fn login<A: AccountActor>(
        &self,
        request: LoginRequest,
    ) -> ServiceResult<AuthResponse<A::View>> {
        let request = request.normalize();
        request.validate()?;

        let Some(credentials) = A::repository(self.ctx)
            .find_credentials_by_email(&request.email)
            .await?
        else {
            self.ctx.password_service().verify_decoy(&request.password);
            warn!("Login failed: unknown email");
            return Err(ServiceError::invalid_credentials());
        };

        if !self
            .ctx
            .password_service()
            .verify(&request.password, &credentials.password_hash)?
        {
            warn!(actor_id = %credentials.actor.id(), "Login failed: wrong password");
            return Err(ServiceError::invalid_credentials());
        }

        info!(actor_id = %credentials.actor.id(), "Logged in");

        self.respond(&credentials.actor, format!("{} logged in successfully", A::LABEL))
    }

    /// Revoke a presented token until its natural expiry
    ///
    /// A token that no longer verifies is left alone; logout still succeeds.
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> ServiceResult<MessageResponse> {
        match self.ctx.token_service().verify(token) {
            Ok(claims) => {
                self.ctx
                    .revoked_tokens()
                    .revoke(token, claims.expires_at())
                    .await?;
                info!(kind = %claims.kind, actor_id = %claims.sub, "Token revoked");
            }
            Err(_) => debug!("Logout with an unverifiable token, nothing to revoke"),
        }

        Ok(MessageResponse::new("Logged out successfully"))
    }

    /// Public view of an authenticated actor
    pub fn profile<A: AccountActor>(&self, actor: &A) -> ProfileResponse<A::View> {
        ProfileResponse(A::View::from(actor))
    }

    fn respond<A: AccountActor>(
        &self,
        actor: &A,
        message: String,
    ) -> ServiceResult<AuthResponse<A::View>> {
        let issued = self
            .ctx
            .token_service()
            .issue(actor.id(), A::KIND)?;

        Ok(AuthResponse::new(
            message,
            issued.token,
            issued.expires_in,
            A::View::from(actor),
        ))
    }
}
