use axum::{extract::State, Json};
use serde_json::Value;

use crate::database::models::booking::{Booking, STATUS_PENDING};
use crate::error::ApiError;
use crate::handlers::utils::require_str;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

const MISSING_FIELDS: &str = "All fields are required";
const INVALID_SERVICE: &str = "Selected service is not valid";

// Postgres error codes used to refine insert failures for support triage.
const UNDEFINED_COLUMN: &str = "42703";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// POST /api/booking - validate and persist an appointment request
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Booking> {
    let name = require_str(&body, "name", MISSING_FIELDS)?;
    let email = require_str(&body, "email", MISSING_FIELDS)?;
    let phone = require_str(&body, "phone", MISSING_FIELDS)?;
    let date = require_str(&body, "date", MISSING_FIELDS)?;
    let time = require_str(&body, "time", MISSING_FIELDS)?;
    let service = coerce_service_id(&body)?;

    let booking = sqlx::query_as::<_, Booking>(
        "INSERT INTO bookings (name, email, phone, service, date, time, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id, name, email, phone, service, date, time, status, created_at",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(service)
    .bind(date)
    .bind(time)
    .bind(STATUS_PENDING)
    .fetch_one(&state.pool)
    .await
    .map_err(map_insert_error)?;

    tracing::info!(id = booking.id, service, "booking request stored");
    Ok(ApiResponse::success(booking))
}

/// The booking form submits `service` as a JSON number or a numeric string
/// depending on the input widget; both coerce to the service id.
fn coerce_service_id(body: &Value) -> Result<i32, ApiError> {
    match body.get("service") {
        None | Some(Value::Null) => Err(ApiError::validation(MISSING_FIELDS)),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| ApiError::validation(INVALID_SERVICE)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ApiError::validation(MISSING_FIELDS));
            }
            trimmed
                .parse::<i32>()
                .map_err(|_| ApiError::validation(INVALID_SERVICE))
        }
        Some(_) => Err(ApiError::validation(INVALID_SERVICE)),
    }
}

/// Refine insert failures: a missing column means the deployed schema does
/// not match this build; a foreign-key violation means the submitted service
/// id does not exist.
fn map_insert_error(err: sqlx::Error) -> ApiError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.code().as_deref() {
            Some(UNDEFINED_COLUMN) => {
                tracing::error!("bookings schema mismatch: {}", db_err.message());
                return ApiError::SchemaMismatch;
            }
            Some(FOREIGN_KEY_VIOLATION) => return ApiError::InvalidServiceReference,
            _ => {}
        }
    }
    ApiError::database(err)
}
