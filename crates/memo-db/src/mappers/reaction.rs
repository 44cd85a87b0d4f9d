//! Reaction model ↔ entity mapping

use memo_core::{Reaction, Snowflake};

use crate::models::ReactionModel;

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            creator_id: Snowflake::new(model.creator_id),
            content_id: model.content_id,
            reaction_type: model.reaction_type,
            created_at: model.created_at,
        }
    }
}
