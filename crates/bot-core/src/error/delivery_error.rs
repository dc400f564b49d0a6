//! Outbound delivery errors

use thiserror::Error;

/// Failure of an outbound call to the messaging platform.
///
/// Callers log and swallow this error; it never fails an invocation.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Platform rejected the call with status {status}: {description}")]
    Rejected { status: u16, description: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl DeliveryError {
    /// Whether the platform answered at all
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
