//! Activity repository implementation

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use memo_core::{Activity, ActivityRepository, RepoResult};

use crate::mappers::{activity_level_str, activity_type_str};

use super::map_db_error;

/// PostgreSQL implementation of the activity repository
///
/// Insert-only: activities are immutable audit records.
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self, activity), fields(activity_id = %activity.id))]
    async fn create(&self, activity: &Activity) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO activities (id, creator_id, activity_type, level, payload, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(activity.id.into_inner())
        .bind(activity.creator_id.into_inner())
        .bind(activity_type_str(activity.activity_type))
        .bind(activity_level_str(activity.level))
        .bind(Json(&activity.payload))
        .bind(activity.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
