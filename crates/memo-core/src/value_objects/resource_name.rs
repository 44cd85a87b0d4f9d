//! Resource name formatting and parsing
//!
//! External references use fixed-prefix resource names: `memos/{uid}` for
//! content items and `users/{id}` for users.

use crate::value_objects::Snowflake;

/// Prefix for memo resource names
pub const MEMO_NAME_PREFIX: &str = "memos/";

/// Prefix for user resource names
pub const USER_NAME_PREFIX: &str = "users/";

/// Error for malformed resource names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceNameError {
    #[error("invalid memo name: {0}")]
    InvalidMemoName(String),
}

/// Extract the memo UID from a `memos/{uid}` resource name.
///
/// The UID must be non-empty and must not contain further path separators.
pub fn extract_memo_uid(name: &str) -> Result<&str, ResourceNameError> {
    let uid = name
        .strip_prefix(MEMO_NAME_PREFIX)
        .ok_or_else(|| ResourceNameError::InvalidMemoName(name.to_string()))?;
    if uid.is_empty() || uid.contains('/') {
        return Err(ResourceNameError::InvalidMemoName(name.to_string()));
    }
    Ok(uid)
}

/// Format a memo UID as a `memos/{uid}` resource name
pub fn format_memo_name(uid: &str) -> String {
    format!("{MEMO_NAME_PREFIX}{uid}")
}

/// Format a user ID as a `users/{id}` resource name
pub fn format_user_name(id: Snowflake) -> String {
    format!("{USER_NAME_PREFIX}{id}")
}
