//! Service context - dependency container for services
//!
//! Holds the repositories and the ID generator needed by services. The
//! context is storage-agnostic: it only sees the repository traits, which
//! keeps the business logic testable with in-memory implementations.

use std::sync::Arc;

use memo_core::traits::{
    ActivityRepository, InboxRepository, MemoRepository, ReactionRepository, UserRepository,
};
use memo_core::{Snowflake, SnowflakeGenerator};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    memo_repo: Arc<dyn MemoRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
    inbox_repo: Arc<dyn InboxRepository>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        memo_repo: Arc<dyn MemoRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
        inbox_repo: Arc<dyn InboxRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            memo_repo,
            reaction_repo,
            activity_repo,
            inbox_repo,
            snowflake_generator,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the memo repository
    pub fn memo_repo(&self) -> &dyn MemoRepository {
        self.memo_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the activity repository
    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    /// Get the inbox repository
    pub fn inbox_repo(&self) -> &dyn InboxRepository {
        self.inbox_repo.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    memo_repo: Option<Arc<dyn MemoRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    inbox_repo: Option<Arc<dyn InboxRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            memo_repo: None,
            reaction_repo: None,
            activity_repo: None,
            inbox_repo: None,
            snowflake_generator: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn memo_repo(mut self, repo: Arc<dyn MemoRepository>) -> Self {
        self.memo_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn inbox_repo(mut self, repo: Arc<dyn InboxRepository>) -> Self {
        self.inbox_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.memo_repo
                .ok_or_else(|| ServiceError::validation("memo_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.activity_repo
                .ok_or_else(|| ServiceError::validation("activity_repo is required"))?,
            self.inbox_repo
                .ok_or_else(|| ServiceError::validation("inbox_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
