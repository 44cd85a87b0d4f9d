//! Memo model ↔ entity mapping

use memo_core::{Memo, Snowflake};

use crate::models::MemoModel;

impl From<MemoModel> for Memo {
    fn from(model: MemoModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            uid: model.uid,
            creator_id: Snowflake::new(model.creator_id),
            created_at: model.created_at,
        }
    }
}
