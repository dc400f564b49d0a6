//! Boundary validation of raw updates

use bot_core::entities::UserIdentity;
use bot_core::update::{CallbackQuery, IncomingMessage, InvalidUpdate, Update};

use crate::types::{RawCallbackQuery, RawMessage, RawUpdate, RawUser};

/// Validate a raw webhook payload into an [`Update`].
///
/// A message takes precedence over a callback when both are present. Updates
/// carrying neither are [`Update::Unrecognized`].
pub fn parse_update(raw: RawUpdate) -> Result<Update, InvalidUpdate> {
    if let Some(message) = raw.message {
        return parse_message(message).map(Update::Message);
    }
    if let Some(callback) = raw.callback_query {
        return parse_callback(callback).map(Update::CallbackQuery);
    }
    Ok(Update::Unrecognized)
}

fn parse_message(raw: RawMessage) -> Result<IncomingMessage, InvalidUpdate> {
    let chat_id = raw
        .chat
        .and_then(|chat| chat.id)
        .ok_or(InvalidUpdate::MissingChatId)?;
    let from = parse_user(raw.from)?;

    Ok(IncomingMessage {
        chat_id,
        from,
        text: raw.text,
    })
}

fn parse_callback(raw: RawCallbackQuery) -> Result<CallbackQuery, InvalidUpdate> {
    let id = raw
        .id
        .filter(|id| !id.is_empty())
        .ok_or(InvalidUpdate::MissingCallbackId)?;
    let chat_id = raw
        .message
        .and_then(|message| message.chat)
        .and_then(|chat| chat.id)
        .ok_or(InvalidUpdate::MissingChatId)?;
    let from = parse_user(raw.from)?;

    Ok(CallbackQuery {
        id,
        chat_id,
        from,
        data: raw.data.unwrap_or_default(),
    })
}

fn parse_user(raw: Option<RawUser>) -> Result<UserIdentity, InvalidUpdate> {
    let raw = raw.ok_or(InvalidUpdate::MissingSender)?;
    let id = raw.id.ok_or(InvalidUpdate::MissingSender)?;

    Ok(UserIdentity {
        id,
        username: raw.username,
        first_name: raw.first_name,
        last_name: raw.last_name,
    })
}
