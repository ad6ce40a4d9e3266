//! Account handlers
//!
//! Registration, login, profile and logout. Rider and driver routes share the
//! generic handlers, instantiated per actor kind in the router.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use ride_service::dto::{
    AuthResponse, DriverResponse, LoginRequest, MessageResponse, ProfileResponse,
    RegisterDriverRequest, RegisterRiderRequest, RiderResponse,
};
use ride_service::{AccountActor, AccountService};

use crate::extractors::{removal_cookie, session_cookie, Authenticated, BearerToken, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a rider
///
/// POST /register/user
pub async fn register_rider(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRiderRequest>,
) -> ApiResult<Created<Json<AuthResponse<RiderResponse>>>> {
    let service = AccountService::new(state.service_context());
    let response = service.register_rider(request).await?;
    Ok(Created(Json(response)))
}

/// Register a driver and their vehicle
///
/// POST /register/captain
pub async fn register_driver(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterDriverRequest>,
) -> ApiResult<Created<Json<AuthResponse<DriverResponse>>>> {
    let service = AccountService::new(state.service_context());
    let response = service.register_driver(request).await?;
    Ok(Created(Json(response)))
}

/// Log in and receive the session cookie
///
/// POST /login/user, POST /login/captain
pub async fn login<A: AccountActor>(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse<A::View>>)> {
    let service = AccountService::new(state.service_context());
    let response = service.login::<A>(request).await?;

    let cookie = session_cookie(response.token(), response.expires_in, state.cookie_secure());
    Ok((jar.add(cookie), Json(response)))
}

/// Current actor's profile
///
/// GET /user/profile, GET /captain/profile
pub async fn profile<A: AccountActor>(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated<A>,
) -> Json<ProfileResponse<A::View>> {
    Json(AccountService::new(state.service_context()).profile(&actor))
}

/// Revoke the presented token and clear the cookie
///
/// GET /logout/user, GET /logout/captain
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    BearerToken(token): BearerToken,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let service = AccountService::new(state.service_context());
    let response = service.logout(&token).await?;
    Ok((jar.add(removal_cookie(state.cookie_secure())), Json(response)))
}
