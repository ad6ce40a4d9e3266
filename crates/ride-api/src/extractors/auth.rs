//! Authentication extractors
//!
//! The token is read from the `token` cookie first, then from an
//! `Authorization: Bearer` header.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use ride_service::{AccountActor, AuthGate, GateRejection};

use super::cookie::TOKEN_COOKIE;
use crate::response::ApiError;
use crate::state::AppState;

/// Whatever token the request carries, if any
#[derive(Debug, Clone)]
pub struct PresentedToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for PresentedToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(TOKEN_COOKIE).filter(|c| !c.value().is_empty()) {
            return Ok(Self(Some(cookie.value().to_string())));
        }

        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        Ok(Self(bearer))
    }
}

/// A token that must be present, without judging its validity
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let PresentedToken(token) = PresentedToken::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});
        token.map(Self).ok_or_else(|| {
            tracing::warn!(cause = %GateRejection::MissingToken, "Request without a token");
            ApiError::unauthenticated()
        })
    }
}

/// Actor admitted by the auth gate for kind `A`
#[derive(Debug, Clone)]
pub struct Authenticated<A>(pub A);

#[async_trait]
impl<S, A> FromRequestParts<S> for Authenticated<A>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    A: AccountActor,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let PresentedToken(token) = PresentedToken::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        let app_state = AppState::from_ref(state);
        let actor = AuthGate::new(app_state.service_context())
            .authenticate::<A>(token.as_deref())
            .await?;

        Ok(Self(actor))
    }
}
