//! Memo database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `memos` table
///
/// The reaction subsystem never writes memos, so no insert model exists.
#[derive(Debug, Clone, FromRow)]
pub struct MemoModel {
    pub id: i64,
    pub uid: String,
    pub creator_id: i64,
    pub created_at: DateTime<Utc>,
}
