use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde_json::json;

use crate::database::manager;
use crate::state::AppState;

/// GET /api/test - static connectivity check used when wiring up deploys.
/// Echoes the request host/origin back; never touches the database.
pub async fn diagnostic(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "API is reachable",
        "timestamp": Utc::now(),
        "environment": state.config.environment.as_str(),
        "host": header_str(&headers, header::HOST),
        "origin": header_str(&headers, header::ORIGIN),
    }))
}

/// GET /health - liveness plus a database probe
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();

    match manager::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "status": "ok", "timestamp": now, "database": "ok" }
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "data": { "status": "degraded", "timestamp": now, "database": "unavailable" }
                })),
            )
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
