//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for the admin surface
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{DeleteRecordRequest, UpdateStatusRequest};
pub use responses::{
    HealthChecks, HealthResponse, ReadinessResponse, RecordListResponse, RecordResponse,
    SuccessResponse, WebhookAck,
};
