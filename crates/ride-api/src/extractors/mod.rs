//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and the session cookie.

mod auth;
pub mod cookie;
mod validated;

pub use auth::{Authenticated, BearerToken, PresentedToken};
pub use cookie::{removal_cookie, session_cookie, TOKEN_COOKIE};
pub use validated::ValidatedJson;
