//! Activity column encoding
//!
//! Activities are write-only from the reaction subsystem, so only the
//! entity-to-column direction exists. The payload travels as JSONB and
//! serializes through serde; the discriminant columns are plain text.

use memo_core::{ActivityLevel, ActivityType};

/// Text stored in the `activity_type` column
pub fn activity_type_str(activity_type: ActivityType) -> &'static str {
    match activity_type {
        ActivityType::MemoReaction => "memo-reaction",
    }
}

/// Text stored in the `level` column
pub fn activity_level_str(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Info => "info",
    }
}
