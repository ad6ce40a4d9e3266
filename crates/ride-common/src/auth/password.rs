//! Password hashing and verification
//!
//! Argon2id with a fresh random salt per hash; the salt and parameters are
//! embedded in the PHC string that gets stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Argon2id PHC string with the default cost parameters that no password
/// matches. Verifying against it costs the same as a real verification.
const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$al5e+Cv3WW/R3gE0gRtgMg$yAlnFjhxvI0u4uI1Es9lsFd81li4HsTZAVsBeanMtW4";

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// A mismatch is `Ok(false)`; only an unreadable hash is an error.
///
/// # Errors
/// Returns an error if the stored hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        hash_password(password)
    }

    pub fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        verify_password(password, hash)
    }

    /// Spend one verification on an account that does not exist
    ///
    /// Keeps the unknown-email login path as slow as a wrong password.
    pub fn verify_decoy(&self, password: &str) {
        if let Err(e) = verify_password(password, DECOY_HASH) {
            tracing::error!(error = %e, "Decoy hash rejected");
        }
    }
}
