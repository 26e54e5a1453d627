use axum::{extract::State, Json};
use serde_json::Value;

use crate::database::models::contact::ContactMessage;
use crate::error::ApiError;
use crate::handlers::utils::require_str;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

const MISSING_FIELDS: &str = "All fields are required";

/// POST /api/contact - validate and persist a contact-form submission
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<ContactMessage> {
    let name = require_str(&body, "name", MISSING_FIELDS)?;
    let email = require_str(&body, "email", MISSING_FIELDS)?;
    let phone = require_str(&body, "phone", MISSING_FIELDS)?;
    let message = require_str(&body, "message", MISSING_FIELDS)?;

    let stored = sqlx::query_as::<_, ContactMessage>(
        "INSERT INTO contact_messages (name, email, phone, message) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, name, email, phone, message, created_at",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(message)
    .fetch_one(&state.pool)
    .await
    .map_err(ApiError::database)?;

    tracing::info!(id = stored.id, "contact message stored");
    Ok(ApiResponse::success(stored))
}
