//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ResourceNameError, Snowflake};

/// Domain layer errors
///
/// Every downstream failure keeps its category so the transport layer can
/// map not-found, validation, and authorization conditions individually
/// instead of collapsing them into a single internal error.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Memo not found: {0}")]
    MemoNotFound(String),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the reaction owner")]
    NotReactionOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MemoNotFound(_) => "UNKNOWN_MEMO",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::InvalidResourceName(_) => "INVALID_RESOURCE_NAME",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NotReactionOwner => "NOT_REACTION_OWNER",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::MemoNotFound(_) | Self::ReactionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidResourceName(_) | Self::ValidationError(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotReactionOwner)
    }
}

impl From<ResourceNameError> for DomainError {
    fn from(err: ResourceNameError) -> Self {
        Self::InvalidResourceName(err.to_string())
    }
}
