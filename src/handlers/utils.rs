use serde_json::Value;

use crate::error::ApiError;

/// Extract a required non-empty string field from a JSON body, or fail with
/// the route's validation message. Bodies are validated by hand instead of
/// deserialized into structs so a missing field maps to the 400 the frontend
/// expects rather than axum's generic deserialization rejection.
pub fn require_str<'a>(
    body: &'a Value,
    field: &str,
    message: &'static str,
) -> Result<&'a str, ApiError> {
    match body.get(field).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::validation(message)),
    }
}
