//! Token issue and verification
//!
//! HS256 JWTs carrying the actor id and kind. Verification applies no clock
//! leeway, and every failure reason collapses into [`TokenError::Invalid`].

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ride_core::{ActorId, ActorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (actor ID)
    pub sub: ActorId,
    /// Identity space of the subject
    pub kind: ActorKind,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token ID
    pub jti: Uuid,
}

impl Claims {
    /// Expiry as a timestamp, used to bound a revocation entry
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    /// Lifetime in seconds, for the cookie `Max-Age`
    pub expires_in: i64,
}

/// Token errors
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Expired, tampered, malformed or signed with another key
    #[error("Invalid token")]
    Invalid,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Signs and verifies tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: i64,
}

impl TokenService {
    /// Create a token service; `expiry` is the token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, expiry: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry,
        }
    }

    #[must_use]
    pub fn expiry(&self) -> i64 {
        self.expiry
    }

    /// Issue a token for an actor with the configured lifetime
    ///
    /// # Errors
    /// Returns `TokenError::Signing` if encoding fails
    pub fn issue(&self, id: ActorId, kind: ActorKind) -> Result<IssuedToken, TokenError> {
        self.issue_with_ttl(id, kind, self.expiry)
    }

    /// Issue a token with an explicit lifetime in seconds
    ///
    /// # Errors
    /// Returns `TokenError::Signing` if encoding fails
    pub fn issue_with_ttl(
        &self,
        id: ActorId,
        kind: ActorKind,
        ttl: i64,
    ) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(ttl);

        let claims = Claims {
            sub: id,
            kind,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at,
            expires_in: ttl,
        })
    }

    /// Verify signature and expiry, returning the claims
    ///
    /// # Errors
    /// Returns `TokenError::Invalid` for any verification failure
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}
