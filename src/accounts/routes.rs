//! Account routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the accounts router
///
/// # Routes
/// - `POST /create` - Validate an account submission
/// - `GET /health` - Liveness check
pub fn accounts_routes() -> Router {
    Router::new()
        .route("/create", post(handlers::create_account))
        .route("/health", get(handlers::health))
}
