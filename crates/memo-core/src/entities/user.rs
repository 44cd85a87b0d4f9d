//! User entity

use chrono::{DateTime, Utc};

use crate::value_objects::{format_user_name, Snowflake};

/// User entity - an account that creates memos and reactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            created_at: Utc::now(),
        }
    }

    /// Get the `users/{id}` resource name for this user
    pub fn resource_name(&self) -> String {
        format_user_name(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name() {
        let user = User::new(Snowflake::new(2), "alice".to_string());
        assert_eq!(user.resource_name(), "users/2");
    }
}
