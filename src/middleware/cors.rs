//! The one CORS policy applied to every route.
//!
//! The origin is echoed back only when it exactly matches the allow-list or
//! ends with the trusted preview-domain suffix; credentials are always
//! allowed, so a wildcard origin is never emitted.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed_origins: Vec<String>,
    preview_suffix: String,
}

impl OriginPolicy {
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            preview_suffix: config.preview_suffix.clone(),
        }
    }

    pub fn is_allowed(&self, origin: &HeaderValue) -> bool {
        let Ok(origin) = origin.to_str() else {
            return false;
        };
        if self.allowed_origins.iter().any(|allowed| allowed == origin) {
            return true;
        }
        !self.preview_suffix.is_empty() && origin.ends_with(&self.preview_suffix)
    }
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let policy = OriginPolicy::new(config);
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            policy.is_allowed(origin)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
