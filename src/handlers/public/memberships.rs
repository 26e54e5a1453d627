use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::database::models::membership::{MembershipTier, MembershipTierRow};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MembershipQuery {
    pub tier: Option<String>,
}

/// GET /api/memberships - one tier by exact name, or every tier.
///
/// Responses are the reshaped wire format: a single object when `?tier=` is
/// given, otherwise an array, matching what the pricing page consumes.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MembershipQuery>,
) -> Result<Response, ApiError> {
    match query.tier {
        Some(tier) => {
            let row = sqlx::query_as::<_, MembershipTierRow>(
                "SELECT * FROM membership_tiers WHERE tier = $1",
            )
            .bind(&tier)
            .fetch_optional(&state.pool)
            .await
            .map_err(ApiError::database)?
            .ok_or_else(|| ApiError::not_found("Membership tier not found"))?;

            Ok(Json(MembershipTier::from(row)).into_response())
        }
        None => {
            let rows =
                sqlx::query_as::<_, MembershipTierRow>("SELECT * FROM membership_tiers ORDER BY id")
                    .fetch_all(&state.pool)
                    .await
                    .map_err(ApiError::database)?;

            let tiers: Vec<MembershipTier> = rows.into_iter().map(Into::into).collect();
            Ok(Json(tiers).into_response())
        }
    }
}
