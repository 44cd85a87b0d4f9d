//! Inbox column encoding
//!
//! Inbox entries are write-only from the reaction subsystem. The message
//! body travels as JSONB through serde; the status column is plain text.

use memo_core::InboxStatus;

/// Text stored in the `status` column
pub fn inbox_status_str(status: InboxStatus) -> &'static str {
    match status {
        InboxStatus::Unread => "UNREAD",
        InboxStatus::Read => "READ",
    }
}
