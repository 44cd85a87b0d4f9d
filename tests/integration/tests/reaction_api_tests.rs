//! Reaction API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test reaction_api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_pool, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Access Control Tests
// ============================================================================

#[tokio::test]
async fn test_list_is_public() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/memos/whatever/reactions")
        .await
        .unwrap();
    let listed: ReactionListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.reactions.is_empty());
}

#[tokio::test]
async fn test_upsert_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/memos/whatever/reactions", &UpsertReactionRequest::thumbs_up())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_auth(
            "/api/v1/memos/whatever/reactions",
            "not-a-jwt",
            &UpsertReactionRequest::thumbs_up(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Upsert + List Tests
// ============================================================================

#[tokio::test]
async fn test_upsert_and_list_reactions() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let actor = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let token = server.token_for(actor.id).unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/memos/{}/reactions", memo.uid),
            &token,
            &UpsertReactionRequest::thumbs_up(),
        )
        .await
        .unwrap();
    let created: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.creator, format!("users/{}", actor.id));
    assert_eq!(created.content_id, format!("memos/{}", memo.uid));
    assert_eq!(created.reaction_type, "👍");

    let response = server
        .get_auth(&format!("/api/v1/memos/{}/reactions", memo.uid), &token)
        .await
        .unwrap();
    let listed: ReactionListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listed.reactions.len(), 1);
    assert_eq!(listed.reactions[0].id, created.id);
}

#[tokio::test]
async fn test_upsert_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let actor = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let token = server.token_for(actor.id).unwrap();
    let path = format!("/api/v1/memos/{}/reactions", memo.uid);

    let response = server
        .post_auth(&path, &token, &UpsertReactionRequest::thumbs_up())
        .await
        .unwrap();
    let first: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&path, &token, &UpsertReactionRequest::thumbs_up())
        .await
        .unwrap();
    let second: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(first.id, second.id);

    let response = server.get_auth(&path, &token).await.unwrap();
    let listed: ReactionListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.reactions.len(), 1);
}

#[tokio::test]
async fn test_unknown_memo_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let actor = seed_user(&pool).await.unwrap();
    let token = server.token_for(actor.id).unwrap();

    let response = server
        .post_auth(
            "/api/v1/memos/no-such-memo/reactions",
            &token,
            &UpsertReactionRequest::thumbs_up(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_MEMO");
}

#[tokio::test]
async fn test_empty_reaction_type_rejected() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let token = server.token_for(owner.id).unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/memos/{}/reactions", memo.uid),
            &token,
            &UpsertReactionRequest {
                reaction_type: String::new(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Notification Fan-out Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_notifies_memo_owner() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let actor = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let token = server.token_for(actor.id).unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/memos/{}/reactions", memo.uid),
            &token,
            &UpsertReactionRequest::thumbs_up(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(count_activities(&pool, actor).await.unwrap(), 1);
    assert_eq!(count_inboxes(&pool, owner).await.unwrap(), 1);
}

#[tokio::test]
async fn test_self_reaction_creates_no_notification() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let token = server.token_for(owner.id).unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/memos/{}/reactions", memo.uid),
            &token,
            &UpsertReactionRequest::thumbs_up(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(count_activities(&pool, owner).await.unwrap(), 0);
    assert_eq!(count_inboxes(&pool, owner).await.unwrap(), 0);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_reaction() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let actor = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let token = server.token_for(actor.id).unwrap();
    let path = format!("/api/v1/memos/{}/reactions", memo.uid);

    let response = server
        .post_auth(&path, &token, &UpsertReactionRequest::thumbs_up())
        .await
        .unwrap();
    let created: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/reactions/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    let listed: ReactionListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.reactions.is_empty());

    // Notification records survive the delete
    assert_eq!(count_activities(&pool, actor).await.unwrap(), 1);
    assert_eq!(count_inboxes(&pool, owner).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_reaction_returns_not_found() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let actor = seed_user(&pool).await.unwrap();
    let token = server.token_for(actor.id).unwrap();

    let response = server
        .delete_auth("/api/v1/reactions/999999999", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_other_users_reaction_forbidden() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let owner = seed_user(&pool).await.unwrap();
    let actor = seed_user(&pool).await.unwrap();
    let memo = seed_memo(&pool, owner).await.unwrap();
    let actor_token = server.token_for(actor.id).unwrap();
    let owner_token = server.token_for(owner.id).unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/memos/{}/reactions", memo.uid),
            &actor_token,
            &UpsertReactionRequest::thumbs_up(),
        )
        .await
        .unwrap();
    let created: ReactionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/reactions/{}", created.id), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_invalid_id_format() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.expect("Failed to connect to database");
    let server = TestServer::start().await.expect("Failed to start server");

    let actor = seed_user(&pool).await.unwrap();
    let token = server.token_for(actor.id).unwrap();

    let response = server
        .delete_auth("/api/v1/reactions/not-a-number", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
