use axum::{extract::State, Extension, Json};

use crate::auth::AdminProfile;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/auth/me - profile of the currently authenticated admin.
///
/// The token only proves possession of a valid session; the profile itself
/// comes from the configured admin record.
pub async fn me(
    State(state): State<AppState>,
    Extension(session): Extension<AuthAdmin>,
) -> Json<AdminProfile> {
    tracing::debug!(username = %session.username, "session lookup");
    Json(state.config.admin.profile())
}
