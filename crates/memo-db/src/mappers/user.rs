//! User model ↔ entity mapping

use memo_core::{Snowflake, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            username: model.username,
            created_at: model.created_at,
        }
    }
}
