//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Upsert reaction request
///
/// The reaction type is a free-form symbolic tag ("👍", "heart", ...); no
/// fixed emoji set is enforced at this layer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertReactionRequest {
    #[validate(length(min = 1, max = 256, message = "Reaction type must be 1-256 characters"))]
    pub reaction_type: String,
}
