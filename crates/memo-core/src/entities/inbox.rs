//! Inbox entity - a delivered notification referencing an activity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Read state of an inbox entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxStatus {
    Unread,
    Read,
}

/// Kind of notification carried by an inbox entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InboxMessageType {
    MemoReaction,
}

/// Message body of an inbox entry
///
/// `activity_id` is a foreign-key-style reference: the Activity must already
/// be persisted (and its id known) before this message is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    #[serde(rename = "type")]
    pub message_type: InboxMessageType,
    pub activity_id: Snowflake,
}

/// Inbox entity
///
/// Created in the same logical operation as its referenced activity.
/// Read/unread transitions are owned by the inbox subsystem, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    pub id: Snowflake,
    /// The acting user
    pub sender_id: Snowflake,
    /// The content owner being notified
    pub receiver_id: Snowflake,
    pub status: InboxStatus,
    pub message: InboxMessage,
    pub created_at: DateTime<Utc>,
}

impl Inbox {
    /// Create an unread memo-reaction notification
    pub fn memo_reaction(
        id: Snowflake,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        activity_id: Snowflake,
    ) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            status: InboxStatus::Unread,
            message: InboxMessage {
                message_type: InboxMessageType::MemoReaction,
                activity_id,
            },
            created_at: Utc::now(),
        }
    }
}
