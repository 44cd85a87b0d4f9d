//! Inbox repository implementation

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::{Inbox, InboxRepository, RepoResult};

use crate::mappers::inbox_status_str;

use super::map_db_error;

/// PostgreSQL implementation of the inbox repository
///
/// Insert-only here: read/unread transitions belong to the inbox subsystem.
pub struct PgInboxRepository {
    pool: PgPool,
}

impl PgInboxRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InboxRepository for PgInboxRepository {
    #[instrument(skip(self, inbox), fields(inbox_id = %inbox.id))]
    async fn create(&self, inbox: &Inbox) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO inboxes (id, sender_id, receiver_id, status, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(inbox.id.into_inner())
        .bind(inbox.sender_id.into_inner())
        .bind(inbox.receiver_id.into_inner())
        .bind(inbox_status_str(inbox.status))
        .bind(Json(&inbox.message))
        .bind(inbox.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
