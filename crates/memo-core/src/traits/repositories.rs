//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Storage is a passive collaborator: it has
//! no knowledge of the reactions-trigger-notifications semantics.

use async_trait::async_trait;

use crate::entities::{Activity, Inbox, Memo, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;
}

// ============================================================================
// Memo Repository
// ============================================================================

#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// Find memo by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Memo>>;

    /// Find memo by resource-name UID
    async fn find_by_uid(&self, uid: &str) -> RepoResult<Option<Memo>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Get all reactions attached to a content item, in storage order
    async fn find_by_content(&self, content_id: &str) -> RepoResult<Vec<Reaction>>;

    /// Create-or-fetch keyed on (creator_id, content_id, reaction_type).
    ///
    /// Inserts the candidate row if no equivalent exists, otherwise returns
    /// the existing row unchanged; the returned reaction is the surviving one.
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction>;

    /// Remove a reaction by ID
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Activity Repository
// ============================================================================

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Persist an activity record
    async fn create(&self, activity: &Activity) -> RepoResult<()>;
}

// ============================================================================
// Inbox Repository
// ============================================================================

#[async_trait]
pub trait InboxRepository: Send + Sync {
    /// Persist an inbox entry
    async fn create(&self, inbox: &Inbox) -> RepoResult<()>;
}
