//! Data transfer objects
//!
//! Request DTOs deserialize and validate API input; response DTOs serialize
//! domain entities for JSON output.

mod mappers;
mod requests;
mod responses;

pub use requests::UpsertReactionRequest;
pub use responses::{HealthResponse, ReactionListResponse, ReactionResponse, ReadinessResponse};
