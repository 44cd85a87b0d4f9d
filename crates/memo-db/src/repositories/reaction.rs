//! Reaction repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::{DomainError, Reaction, ReactionRepository, RepoResult, Snowflake};

use crate::models::ReactionModel;

use super::map_db_error;

/// PostgreSQL implementation of the reaction repository
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Reaction>> {
        let model = sqlx::query_as::<_, ReactionModel>(
            "SELECT id, creator_id, content_id, reaction_type, created_at \
             FROM reactions WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_content(&self, content_id: &str) -> RepoResult<Vec<Reaction>> {
        let models = sqlx::query_as::<_, ReactionModel>(
            "SELECT id, creator_id, content_id, reaction_type, created_at \
             FROM reactions WHERE content_id = $1 ORDER BY id",
        )
        .bind(content_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Reaction::from).collect())
    }

    /// Create-or-fetch in a single round trip.
    ///
    /// The unique index on (creator_id, content_id, reaction_type) makes the
    /// conflict arm a no-op update, so RETURNING yields the surviving row:
    /// the fresh one on insert, the pre-existing one (original id and
    /// timestamp) on conflict.
    #[instrument(skip(self, reaction))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        let model = sqlx::query_as::<_, ReactionModel>(
            "INSERT INTO reactions (id, creator_id, content_id, reaction_type, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (creator_id, content_id, reaction_type) \
             DO UPDATE SET reaction_type = EXCLUDED.reaction_type \
             RETURNING id, creator_id, content_id, reaction_type, created_at",
        )
        .bind(reaction.id.into_inner())
        .bind(reaction.creator_id.into_inner())
        .bind(&reaction.content_id)
        .bind(&reaction.reaction_type)
        .bind(reaction.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Reaction::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM reactions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound(id));
        }

        Ok(())
    }
}
