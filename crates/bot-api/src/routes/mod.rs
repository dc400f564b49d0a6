//! Route definitions
//!
//! Every bot profile is mounted under `/bots/:bot`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, methods, records, webhook};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(health_routes()).merge(bot_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Webhook and admin routes, one set per bot
fn bot_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bots/:bot/webhook",
            post(webhook::receive_update)
                .options(methods::preflight)
                .fallback(methods::method_not_allowed),
        )
        .route(
            "/bots/:bot/orders",
            get(records::list_records)
                .put(records::update_record_status)
                .delete(records::delete_record)
                .options(methods::preflight)
                .fallback(methods::method_not_allowed),
        )
}
