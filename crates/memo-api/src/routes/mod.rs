//! Route definitions
//!
//! All API routes mounted under /api/v1; health probes live at the root.

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::{health, reactions};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/memos/:memo_uid/reactions",
            get(reactions::list_reactions).post(reactions::upsert_reaction),
        )
        .route(
            "/reactions/:reaction_id",
            delete(reactions::delete_reaction),
        )
}
