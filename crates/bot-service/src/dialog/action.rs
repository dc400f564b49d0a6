//! Named handler actions

use crate::profiles::Menu;

/// What the engine does for a routed update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Send a canned menu
    Reply(&'a Menu),
    /// Create an order for the catalog service key
    StartOrder(&'a str),
    /// Remember that the next free text completes a submission, then prompt
    BeginSubmission(&'a Menu),
    /// Persist the free text as a record and forget the state
    CompleteSubmission,
    /// Show the sender's most recent records
    ListRecords(i64),
    /// Free text nobody expected
    Fallback,
    /// Answer the callback and do nothing else
    Acknowledge,
}

impl<'a> Action<'a> {
    /// Stable name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reply(_) => "reply",
            Self::StartOrder(_) => "start_order",
            Self::BeginSubmission(_) => "begin_submission",
            Self::CompleteSubmission => "complete_submission",
            Self::ListRecords(_) => "list_records",
            Self::Fallback => "fallback",
            Self::Acknowledge => "acknowledge",
        }
    }

    /// The canned menu this action sends, if any
    pub fn menu(&self) -> Option<&'a Menu> {
        match self {
            Self::Reply(menu) | Self::BeginSubmission(menu) => Some(menu),
            _ => None,
        }
    }
}
