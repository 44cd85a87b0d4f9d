//! User repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::{RepoResult, Snowflake, User, UserRepository};

use crate::models::UserModel;

use super::map_db_error;

/// PostgreSQL implementation of the user repository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(User::from))
    }
}
