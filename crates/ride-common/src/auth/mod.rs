//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, IssuedToken, TokenError, TokenService};
pub use password::{hash_password, verify_password, PasswordService};
