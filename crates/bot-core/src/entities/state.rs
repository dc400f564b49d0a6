//! Dialog state - the checkpoint that bridges stateless invocations

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// What the next free-text message from a user should be interpreted as.
///
/// Idle is represented by the absence of a stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogState {
    /// The user started a submission flow; the next text completes it
    AwaitingSubmission,
}

impl DialogState {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingSubmission => "awaiting_submission",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // "waiting_appeal" was written by earlier deployments of the appeal bot
            "awaiting_submission" | "waiting_appeal" => Ok(Self::AwaitingSubmission),
            other => Err(DomainError::UnknownDialogState(other.to_string())),
        }
    }
}
