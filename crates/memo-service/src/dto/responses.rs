//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single reaction as returned by the API
///
/// `creator` is the `users/{id}` resource name of the reacting user.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: String,
    pub creator: String,
    pub content_id: String,
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
}

/// List of reactions attached to one memo
#[derive(Debug, Serialize)]
pub struct ReactionListResponse {
    pub reactions: Vec<ReactionResponse>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn ready(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ready" } else { "not_ready" },
            database: if db_healthy { "up" } else { "down" },
        }
    }
}
