//! Test fixtures and data generators
//!
//! Users and memos belong to other subsystems, so integration tests seed
//! them straight into the database.

use anyhow::Result;
use memo_core::Snowflake;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A seeded test user with its database id
#[derive(Debug, Clone, Copy)]
pub struct SeededUser {
    pub id: Snowflake,
}

/// A seeded test memo with its database id and resource-name uid
#[derive(Debug, Clone)]
pub struct SeededMemo {
    pub id: Snowflake,
    pub uid: String,
}

/// Insert a user row with a unique username
pub async fn seed_user(pool: &PgPool) -> Result<SeededUser> {
    let suffix = unique_suffix();
    // Test ids sit far above any generated snowflake epoch offset collisions
    let id = Snowflake::new(9_000_000_000_000 + suffix as i64);

    sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
        .bind(id.into_inner())
        .bind(format!("testuser{suffix}"))
        .execute(pool)
        .await?;

    Ok(SeededUser { id })
}

/// Insert a memo row owned by the given user
pub async fn seed_memo(pool: &PgPool, creator: SeededUser) -> Result<SeededMemo> {
    let suffix = unique_suffix();
    let id = Snowflake::new(8_000_000_000_000 + suffix as i64);
    let uid = format!("test-memo-{suffix}");

    sqlx::query("INSERT INTO memos (id, uid, creator_id) VALUES ($1, $2, $3)")
        .bind(id.into_inner())
        .bind(&uid)
        .bind(creator.id.into_inner())
        .execute(pool)
        .await?;

    Ok(SeededMemo { id, uid })
}

/// Count activities created by a user
pub async fn count_activities(pool: &PgPool, creator: SeededUser) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities WHERE creator_id = $1")
        .bind(creator.id.into_inner())
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Count inbox entries delivered to a user
pub async fn count_inboxes(pool: &PgPool, receiver: SeededUser) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inboxes WHERE receiver_id = $1")
        .bind(receiver.id.into_inner())
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Upsert reaction request
#[derive(Debug, Serialize)]
pub struct UpsertReactionRequest {
    pub reaction_type: String,
}

impl UpsertReactionRequest {
    pub fn thumbs_up() -> Self {
        Self {
            reaction_type: "👍".to_string(),
        }
    }
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub id: String,
    pub creator: String,
    pub content_id: String,
    pub reaction_type: String,
    pub created_at: String,
}

/// Reaction list response
#[derive(Debug, Deserialize)]
pub struct ReactionListResponse {
    pub reactions: Vec<ReactionResponse>,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
