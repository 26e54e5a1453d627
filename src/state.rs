use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state: configuration plus the connection pool.
/// Both are cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            pool,
        }
    }
}
