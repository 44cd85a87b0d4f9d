//! # memo-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Activity, ActivityLevel, ActivityPayload, ActivityType, Inbox, InboxMessage, InboxMessageType,
    InboxStatus, Memo, Reaction, User,
};
pub use error::DomainError;
pub use traits::{
    ActivityRepository, InboxRepository, MemoRepository, ReactionRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{
    extract_memo_uid, format_memo_name, format_user_name, ResourceNameError, Snowflake,
    SnowflakeGenerator, SnowflakeParseError, MEMO_NAME_PREFIX, USER_NAME_PREFIX,
};
