use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::auth::{self, Claims, TOKEN_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated admin context extracted from the session cookie.
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl From<Claims> for AuthAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Session middleware for the protected tier: reads the `token` cookie,
/// verifies it, and injects [`AuthAdmin`] into the request extensions.
///
/// A missing cookie and an unverifiable one produce distinct 401 messages,
/// matching what the frontend expects.
pub async fn cookie_auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let claims = auth::verify_token(&token, &state.config.security.jwt_secret)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(AuthAdmin::from(claims));
    Ok(next.run(request).await)
}
