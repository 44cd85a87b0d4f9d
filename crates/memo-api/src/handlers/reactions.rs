//! Reaction handlers
//!
//! Endpoints for memo reactions.

use axum::{
    extract::{Path, State},
    Json,
};
use memo_core::format_memo_name;
use memo_service::{
    ReactionListResponse, ReactionResponse, ReactionService, UpsertReactionRequest,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all reactions on a memo
///
/// GET /memos/{memo_uid}/reactions
///
/// Public: listing is a read with no actor, so no token is required.
pub async fn list_reactions(
    State(state): State<AppState>,
    Path(memo_uid): Path<String>,
) -> ApiResult<Json<ReactionListResponse>> {
    let service = ReactionService::new(state.service_context());
    let reactions = service
        .list_reactions(&format_memo_name(&memo_uid))
        .await?;
    Ok(Json(ReactionListResponse { reactions }))
}

/// Add a reaction to a memo, or return the existing one
///
/// POST /memos/{memo_uid}/reactions
pub async fn upsert_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(memo_uid): Path<String>,
    Json(request): Json<UpsertReactionRequest>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service
        .upsert_reaction(auth.user_id, &format_memo_name(&memo_uid), request)
        .await?;
    Ok(Created(Json(reaction)))
}

/// Delete own reaction by id
///
/// DELETE /reactions/{reaction_id}
pub async fn delete_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reaction_id): Path<String>,
) -> ApiResult<NoContent> {
    let reaction_id = reaction_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid reaction_id format"))?;

    let service = ReactionService::new(state.service_context());
    service.delete_reaction(auth.user_id, reaction_id).await?;
    Ok(NoContent)
}
