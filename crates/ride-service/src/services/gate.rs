//! Auth gate
//!
//! Decides whether a request carrying a token may reach a protected handler,
//! and which actor it acts as.

use std::fmt;

use tracing::{instrument, warn};

use super::account::AccountActor;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Why a request was turned away
///
/// Logged, never returned: clients always see the same 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    MissingToken,
    Revoked,
    InvalidToken,
    ActorMissing,
}

impl GateRejection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::Revoked => "revoked",
            Self::InvalidToken => "invalid_token",
            Self::ActorMissing => "actor_missing",
        }
    }
}

impl fmt::Display for GateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auth gate, parameterised per call by the actor kind it protects
pub struct AuthGate<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthGate<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the actor behind a token
    ///
    /// The revocation list is consulted before the signature, and the actor is
    /// looked up only in the store of kind `A`.
    ///
    /// # Errors
    /// Any rejection yields the unauthenticated error; a store failure is
    /// propagated as-is.
    #[instrument(skip_all, fields(kind = %A::KIND))]
    pub async fn authenticate<A: AccountActor>(&self, token: Option<&str>) -> ServiceResult<A> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(reject(GateRejection::MissingToken));
        };

        if self.ctx.revoked_tokens().is_revoked(token).await? {
            return Err(reject(GateRejection::Revoked));
        }

        let claims = self
            .ctx
            .token_service()
            .verify(token)
            .map_err(|_| reject(GateRejection::InvalidToken))?;

        // A token from the other identity space names no actor here
        if claims.kind != A::KIND {
            return Err(reject(GateRejection::ActorMissing));
        }

        A::repository(self.ctx)
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| reject(GateRejection::ActorMissing))
    }
}

fn reject(cause: GateRejection) -> ServiceError {
    warn!(cause = %cause, "Auth gate rejected request");
    ServiceError::unauthenticated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_names() {
        assert_eq!(GateRejection::MissingToken.as_str(), "missing_token");
        assert_eq!(GateRejection::Revoked.to_string(), "revoked");
        assert_eq!(GateRejection::InvalidToken.as_str(), "invalid_token");
        assert_eq!(GateRejection::ActorMissing.as_str(), "actor_missing");
    }

    #[test]
    fn test_every_rejection_is_the_same_error() {
        for cause in [
            GateRejection::MissingToken,
            GateRejection::Revoked,
            GateRejection::InvalidToken,
            GateRejection::ActorMissing,
        ] {
            let err = reject(cause);
            assert!(err.is_unauthenticated());
            assert_eq!(err.to_string(), "Unauthorized");
        }
    }
}
