use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use serde_json::{json, Value};

use crate::auth::{self, AdminProfile, Claims, TOKEN_COOKIE};
use crate::error::ApiError;
use crate::handlers::utils::require_str;
use crate::middleware::response::ApiResponse;
use crate::state::AppState;

const MISSING_CREDENTIALS: &str = "Username and password are required";

/// POST /api/auth/login - authenticate the admin and set the session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> Result<(CookieJar, ApiResponse<AdminProfile>), ApiError> {
    let username = require_str(&body, "username", MISSING_CREDENTIALS)?;
    let password = require_str(&body, "password", MISSING_CREDENTIALS)?;

    let admin = &state.config.admin;
    if !admin.verify_login(username, password) {
        // Deliberately generic: the response never says which field was wrong.
        tracing::warn!(username, "failed admin login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let security = &state.config.security;
    let claims = Claims::new(admin, security.token_ttl_hours);
    let token = auth::issue_token(&claims, &security.jwt_secret)?;
    let cookie = session_cookie(
        token,
        Duration::hours(security.token_ttl_hours),
        security.cookie_secure,
    );

    tracing::info!(username = %admin.username, "admin logged in");
    Ok((jar.add(cookie), ApiResponse::success(admin.profile())))
}

/// POST /api/auth/logout - clear the session cookie; always succeeds
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiResponse<Value>) {
    let cookie = session_cookie(
        String::new(),
        Duration::ZERO,
        state.config.security.cookie_secure,
    );
    (
        jar.add(cookie),
        ApiResponse::success(json!({ "message": "Logged out" })),
    )
}

/// The session cookie, with the same flags whether it is being set or
/// cleared: HTTP-only, strict same-site, secure in production, whole-site
/// path. Clearing is a zero max-age with an empty value.
fn session_cookie(value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, value);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_secure(secure);
    cookie.set_max_age(max_age);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_hardening_flags() {
        let cookie = session_cookie("abc".to_string(), Duration::hours(24), true);
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
    }

    #[test]
    fn cleared_cookie_is_empty_with_zero_max_age() {
        let cookie = session_cookie(String::new(), Duration::ZERO, false);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
