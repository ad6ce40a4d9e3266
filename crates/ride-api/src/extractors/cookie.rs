//! Session cookie helpers

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE: &str = "token";

/// `token` cookie for a freshly issued token
///
/// `HttpOnly; Path=/; SameSite=Lax; Max-Age=<lifetime>`, `Secure` on request.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::parse(format!("{TOKEN_COOKIE}={token}; Max-Age={max_age_secs}"))
        .unwrap_or_else(|_| Cookie::new(TOKEN_COOKIE, token.to_string()));
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie
}

/// Cookie instructing the client to drop its session token
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie.make_removal();
    cookie
}
