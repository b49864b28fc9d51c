//! Router configuration.

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    download, home, login, login_form, logout, register, register_form, secrets, AppState,
};

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/secrets", get(secrets))
        .route("/logout", get(logout))
        .route("/download", get(download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
