pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full router: public routes, cookie-protected admin routes,
/// and the global CORS + trace layers. Wrong verbs on any route get a 405
/// from axum's method routing.
pub fn app(state: AppState) -> Router {
    let cors = middleware::cors::cors_layer(&state.config.cors);

    Router::new()
        .merge(public_routes())
        .merge(admin_routes(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public::{auth, booking, contact, diagnostic, memberships};

    Router::new()
        .route("/health", get(diagnostic::health))
        .route("/api/test", get(diagnostic::diagnostic))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/booking", post(booking::create))
        .route("/api/contact", post(contact::create))
        .route("/api/memberships", get(memberships::list))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{auth, booking, contact};

    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/bookings", get(booking::list))
        .route("/api/contacts", get(contact::list))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::cookie_auth_middleware,
        ))
}
