//! Telegram wire types
//!
//! Inbound structs are deliberately permissive (every field optional) so a
//! payload that deserializes can still be rejected with a precise
//! [`InvalidUpdate`](bot_core::InvalidUpdate) reason at the boundary.

use serde::{Deserialize, Serialize};

use bot_core::value_objects::{InlineKeyboard, OutgoingMessage, ParseMode};

// ============================================================================
// Inbound
// ============================================================================

/// Webhook update body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUpdate {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<RawMessage>,
    #[serde(default)]
    pub callback_query: Option<RawCallbackQuery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub chat: Option<RawChat>,
    #[serde(default)]
    pub from: Option<RawUser>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChat {
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCallbackQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub from: Option<RawUser>,
    #[serde(default)]
    pub message: Option<RawMessage>,
    #[serde(default)]
    pub data: Option<String>,
}

// ============================================================================
// Outbound
// ============================================================================

/// `sendMessage` request body
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    pub parse_mode: ParseMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup<'a>>,
}

impl<'a> From<&'a OutgoingMessage> for SendMessageRequest<'a> {
    fn from(message: &'a OutgoingMessage) -> Self {
        Self {
            chat_id: message.chat_id,
            text: &message.text,
            parse_mode: message.parse_mode,
            reply_markup: message.keyboard.as_ref().map(ReplyMarkup::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReplyMarkup<'a> {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton<'a>>>,
}

impl<'a> From<&'a InlineKeyboard> for ReplyMarkup<'a> {
    fn from(keyboard: &'a InlineKeyboard) -> Self {
        Self {
            inline_keyboard: keyboard
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|button| InlineKeyboardButton {
                            text: &button.label,
                            callback_data: &button.payload,
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InlineKeyboardButton<'a> {
    pub text: &'a str,
    pub callback_data: &'a str,
}

/// `answerCallbackQuery` request body
#[derive(Debug, Serialize)]
pub struct AnswerCallbackQueryRequest<'a> {
    pub callback_query_id: &'a str,
}

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
