use axum::extract::State;

use crate::database::models::booking::Booking;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/bookings - every booking request, newest first (admin dashboard)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Booking>> {
    let bookings =
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC, id DESC")
            .fetch_all(&state.pool)
            .await
            .map_err(ApiError::database)?;

    Ok(ApiResponse::success(bookings))
}
