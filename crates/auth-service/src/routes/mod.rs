use crate::handlers::auth_handler::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Credential and token lifecycle
        .route("/register", post(auth_handler::handle_register))
        .route("/login", post(auth_handler::handle_login))
        .route("/validate", post(auth_handler::handle_validate))
        // Health check
        .route("/health", get(health_check))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
