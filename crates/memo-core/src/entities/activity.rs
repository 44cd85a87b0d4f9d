//! Activity entity - an audit-log record of a user-visible event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Kind of event an activity describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    MemoReaction,
}

/// Severity level of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Info,
}

/// Structured payload attached to an activity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPayload {
    pub memo_id: Snowflake,
    pub reaction_type: String,
}

/// Activity entity
///
/// Created exactly once per qualifying reaction upsert (never on delete,
/// never on self-reaction) and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: Snowflake,
    /// The acting user
    pub creator_id: Snowflake,
    pub activity_type: ActivityType,
    pub level: ActivityLevel,
    pub payload: ActivityPayload,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Create a memo-reaction activity for the given actor
    pub fn memo_reaction(
        id: Snowflake,
        creator_id: Snowflake,
        memo_id: Snowflake,
        reaction_type: String,
    ) -> Self {
        Self {
            id,
            creator_id,
            activity_type: ActivityType::MemoReaction,
            level: ActivityLevel::Info,
            payload: ActivityPayload {
                memo_id,
                reaction_type,
            },
            created_at: Utc::now(),
        }
    }
}
