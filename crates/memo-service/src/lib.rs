//! # memo-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! The reaction service is the heart of this crate: it resolves memo
//! resource names, upserts reactions, and fans a notification out to the
//! memo owner's inbox when someone else reacts.

pub mod dto;
pub mod services;

pub use dto::{
    HealthResponse, ReactionListResponse, ReactionResponse, ReadinessResponse,
    UpsertReactionRequest,
};
pub use services::{
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
