use axum::extract::State;

use crate::database::models::contact::ContactMessage;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/contacts - every contact message, newest first (admin dashboard)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ContactMessage>> {
    let messages = sqlx::query_as::<_, ContactMessage>(
        "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(ApiError::database)?;

    Ok(ApiResponse::success(messages))
}
