//! Memo entity - a shared note that can be reacted to

use chrono::{DateTime, Utc};

use crate::value_objects::{format_memo_name, Snowflake};

/// Memo entity
///
/// The reaction subsystem only reads memos: the UID resolves resource names
/// and `creator_id` drives the self-reaction suppression branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    pub id: Snowflake,
    /// Opaque identifier used in `memos/{uid}` resource names
    pub uid: String,
    pub creator_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Memo {
    /// Create a new Memo
    pub fn new(id: Snowflake, uid: String, creator_id: Snowflake) -> Self {
        Self {
            id,
            uid,
            creator_id,
            created_at: Utc::now(),
        }
    }

    /// Get the `memos/{uid}` resource name for this memo
    pub fn resource_name(&self) -> String {
        format_memo_name(&self.uid)
    }

    /// Check whether the given user owns this memo
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.creator_id == user_id
    }
}
