pub mod auth;
pub mod cors;
pub mod response;

pub use auth::{cookie_auth_middleware, AuthAdmin};
pub use cors::cors_layer;
pub use response::{ApiResponse, ApiResult};
