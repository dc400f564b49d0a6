//! Inbound update model
//!
//! Updates are validated at the boundary (see `bot-telegram`) into this tagged
//! union, so handlers never see a loosely typed payload.

use thiserror::Error;

use crate::entities::UserIdentity;

/// A user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub from: UserIdentity,
    /// `None` for non-text messages (photos, stickers, ...)
    pub text: Option<String>,
}

/// A button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackQuery {
    pub id: String,
    pub chat_id: i64,
    pub from: UserIdentity,
    pub data: String,
}

/// One inbound event delivered by the messaging platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Message(IncomingMessage),
    CallbackQuery(CallbackQuery),
    /// Any other update kind (edited messages, channel posts, ...)
    Unrecognized,
}

impl Update {
    /// Identity of the sender, if the update carries one
    pub fn sender(&self) -> Option<&UserIdentity> {
        match self {
            Self::Message(m) => Some(&m.from),
            Self::CallbackQuery(c) => Some(&c.from),
            Self::Unrecognized => None,
        }
    }

    /// Chat the reply should go to
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            Self::Message(m) => Some(m.chat_id),
            Self::CallbackQuery(c) => Some(c.chat_id),
            Self::Unrecognized => None,
        }
    }
}

/// Update rejected at the boundary because required identity fields are missing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUpdate {
    #[error("update is missing chat id")]
    MissingChatId,

    #[error("update is missing sender id")]
    MissingSender,

    #[error("callback query is missing its id")]
    MissingCallbackId,
}
