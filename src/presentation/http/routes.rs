//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// Account creation and login
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(handlers::account::create_account))
        .route("/login", post(handlers::account::login))
}

/// Routes that require a valid bearer token
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/accounts/me", get(handlers::account::current_account))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
