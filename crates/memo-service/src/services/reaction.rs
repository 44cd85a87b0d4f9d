//! Reaction service
//!
//! Coordinates the reaction lifecycle: listing a memo's reactions, upserting
//! a reaction, and deleting one. Upserting on someone else's memo fans out a
//! notification: one Activity record, then one Inbox entry referencing it.

use tracing::{info, instrument};
use validator::Validate;

use memo_core::{extract_memo_uid, Activity, DomainError, Inbox, Memo, Reaction, Snowflake};

use crate::dto::{ReactionResponse, UpsertReactionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all reactions attached to a memo, in storage order
    ///
    /// The result is possibly empty, never an error, for a well-formed name
    /// with no reactions. Any unresolvable creator fails the whole call
    /// rather than returning a partial list.
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, memo_name: &str) -> ServiceResult<Vec<ReactionResponse>> {
        let uid = extract_memo_uid(memo_name).map_err(DomainError::from)?;

        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_content(&memo_core::format_memo_name(uid))
            .await?;

        let mut responses = Vec::with_capacity(reactions.len());
        for reaction in &reactions {
            responses.push(self.to_response(reaction).await?);
        }

        Ok(responses)
    }

    /// Add a reaction to a memo, or return the existing one
    ///
    /// Keyed on (actor, content, type): repeating the call returns the row
    /// created the first time, with its original id. When the actor is not
    /// the memo owner, one Activity and one Inbox entry are created as well;
    /// a self-reaction creates neither.
    #[instrument(skip(self, request), fields(reaction_type = %request.reaction_type))]
    pub async fn upsert_reaction(
        &self,
        actor_id: Snowflake,
        memo_name: &str,
        request: UpsertReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let memo = self.resolve_memo(memo_name).await?;

        let candidate = Reaction::new(
            self.ctx.generate_id(),
            actor_id,
            memo.resource_name(),
            request.reaction_type,
        );
        let reaction = self.ctx.reaction_repo().upsert(&candidate).await?;

        info!(
            reaction_id = %reaction.id,
            actor_id = %actor_id,
            content_id = %reaction.content_id,
            "Reaction upserted"
        );

        // Reacting to someone else's memo notifies the owner. The activity
        // must be persisted first: the inbox message references its id.
        // A failure between the two writes surfaces as an error without
        // compensation, so the reaction row always survives.
        if !memo.is_owned_by(actor_id) {
            let activity = Activity::memo_reaction(
                self.ctx.generate_id(),
                actor_id,
                memo.id,
                reaction.reaction_type.clone(),
            );
            self.ctx.activity_repo().create(&activity).await?;

            let inbox = Inbox::memo_reaction(
                self.ctx.generate_id(),
                actor_id,
                memo.creator_id,
                activity.id,
            );
            self.ctx.inbox_repo().create(&inbox).await?;

            info!(
                activity_id = %activity.id,
                receiver_id = %memo.creator_id,
                "Reaction notification delivered"
            );
        }

        self.to_response(&reaction).await
    }

    /// Delete a reaction by id
    ///
    /// Only the reaction's creator may delete it. Activity and Inbox records
    /// created by the original upsert are never retracted.
    #[instrument(skip(self))]
    pub async fn delete_reaction(
        &self,
        actor_id: Snowflake,
        reaction_id: Snowflake,
    ) -> ServiceResult<()> {
        let reaction = self
            .ctx
            .reaction_repo()
            .find_by_id(reaction_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reaction", reaction_id.to_string()))?;

        if reaction.creator_id != actor_id {
            return Err(DomainError::NotReactionOwner.into());
        }

        self.ctx.reaction_repo().delete(reaction_id).await?;

        info!(reaction_id = %reaction_id, actor_id = %actor_id, "Reaction deleted");

        Ok(())
    }

    /// Resolve a `memos/{uid}` resource name to a memo
    async fn resolve_memo(&self, memo_name: &str) -> ServiceResult<Memo> {
        let uid = extract_memo_uid(memo_name).map_err(DomainError::from)?;

        self.ctx
            .memo_repo()
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| DomainError::MemoNotFound(memo_name.to_string()).into())
    }

    /// Convert a reaction to its API shape, resolving the creator
    async fn to_response(&self, reaction: &Reaction) -> ServiceResult<ReactionResponse> {
        self.ctx
            .user_repo()
            .find_by_id(reaction.creator_id)
            .await?
            .ok_or(DomainError::UserNotFound(reaction.creator_id))?;

        Ok(ReactionResponse::from(reaction))
    }
}
