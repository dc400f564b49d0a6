//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Fields are optional so that a missing field is a validation error (400)
//! rather than a deserialization error.

use serde::Deserialize;
use validator::Validate;

/// `PUT /bots/{bot}/orders`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(required(message = "Missing id or status"))]
    pub id: Option<i64>,

    #[validate(
        required(message = "Missing id or status"),
        length(min = 1, message = "Status must not be empty")
    )]
    pub status: Option<String>,
}

/// `DELETE /bots/{bot}/orders`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DeleteRecordRequest {
    #[validate(required(message = "Missing id"))]
    pub id: Option<i64>,
}
