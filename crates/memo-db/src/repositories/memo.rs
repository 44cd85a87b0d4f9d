//! Memo repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::{Memo, MemoRepository, RepoResult, Snowflake};

use crate::models::MemoModel;

use super::map_db_error;

/// PostgreSQL implementation of the memo repository
///
/// Read-only: the reaction subsystem resolves memos but never mutates them.
pub struct PgMemoRepository {
    pool: PgPool,
}

impl PgMemoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoRepository for PgMemoRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Memo>> {
        let model = sqlx::query_as::<_, MemoModel>(
            "SELECT id, uid, creator_id, created_at FROM memos WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Memo::from))
    }

    #[instrument(skip(self))]
    async fn find_by_uid(&self, uid: &str) -> RepoResult<Option<Memo>> {
        let model = sqlx::query_as::<_, MemoModel>(
            "SELECT id, uid, creator_id, created_at FROM memos WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(Memo::from))
    }
}
