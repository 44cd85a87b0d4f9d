//! Reaction entity - an emoji-like reaction attached to a content item

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Reaction entity
///
/// One actor's reaction to one content item. The identifying triple is
/// (creator_id, content_id, reaction_type); the storage layer enforces its
/// uniqueness through the upsert contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub creator_id: Snowflake,
    /// Opaque identifier of the reacted-to content (a memo name, or a comment name)
    pub content_id: String,
    /// Symbolic tag such as "👍" or "❤"; no enum enforced at this layer
    pub reaction_type: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(
        id: Snowflake,
        creator_id: Snowflake,
        content_id: String,
        reaction_type: String,
    ) -> Self {
        Self {
            id,
            creator_id,
            content_id,
            reaction_type,
            created_at: Utc::now(),
        }
    }

    /// Check whether this reaction matches the identifying triple of another
    pub fn same_triple(&self, other: &Reaction) -> bool {
        self.creator_id == other.creator_id
            && self.content_id == other.content_id
            && self.reaction_type == other.reaction_type
    }
}
