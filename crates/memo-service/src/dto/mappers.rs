//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use memo_core::{format_user_name, Reaction};

use super::responses::ReactionResponse;

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            creator: format_user_name(reaction.creator_id),
            content_id: reaction.content_id.clone(),
            reaction_type: reaction.reaction_type.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}
