//! Test fixtures and data generators
//!
//! Telegram update payloads and the JSON shapes the server answers with.

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique Telegram user ids
static USER_COUNTER: AtomicI64 = AtomicI64::new(0);

/// Get a user id no other test (or earlier run against the same database) uses
pub fn unique_user_id() -> i64 {
    static BASE: OnceLock<i64> = OnceLock::new();
    let base = *BASE.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64 * 1000)
            .unwrap_or_default()
    });
    base + USER_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Webhook path of a bot
pub fn webhook(bot: &str) -> String {
    format!("/bots/{bot}/webhook")
}

/// Admin records path of a bot
pub fn orders(bot: &str) -> String {
    format!("/bots/{bot}/orders")
}

/// A private-chat text message
pub fn text_update(user_id: i64, text: &str) -> Value {
    json!({
        "update_id": 1,
        "message": {
            "message_id": 10,
            "chat": { "id": user_id, "type": "private" },
            "from": { "id": user_id, "username": "a", "first_name": "Анна" },
            "text": text
        }
    })
}

/// A message with no text (a sticker)
pub fn sticker_update(user_id: i64) -> Value {
    json!({
        "update_id": 2,
        "message": {
            "chat": { "id": user_id },
            "from": { "id": user_id },
            "sticker": { "file_id": "abc" }
        }
    })
}

/// An inline button press
pub fn callback_update(user_id: i64, callback_id: &str, data: &str) -> Value {
    json!({
        "update_id": 3,
        "callback_query": {
            "id": callback_id,
            "from": { "id": user_id },
            "message": { "chat": { "id": user_id } },
            "data": data
        }
    })
}

/// A message whose sender is missing
pub fn anonymous_update() -> Value {
    json!({
        "update_id": 4,
        "message": { "chat": { "id": 1 }, "text": "/start" }
    })
}

/// An update kind no bot handles
pub fn edited_message_update() -> Value {
    json!({
        "update_id": 5,
        "edited_message": { "chat": { "id": 1 }, "from": { "id": 1 }, "text": "x" }
    })
}

/// `{"ok": true}`
#[derive(Debug, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// `{"success": true}`
#[derive(Debug, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// `{"orders": [...]}`
#[derive(Debug, Deserialize)]
pub struct RecordList {
    pub orders: Vec<RecordJson>,
}

/// One record as listed by the admin surface
#[derive(Debug, Deserialize)]
pub struct RecordJson {
    pub id: i64,
    pub bot: String,
    pub kind: String,
    pub telegram_user_id: i64,
    pub telegram_username: Option<String>,
    pub service: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Liveness probe body
#[derive(Debug, Deserialize)]
pub struct HealthJson {
    pub status: String,
    pub service: String,
    pub bots: Vec<String>,
}

/// Readiness probe body
#[derive(Debug, Deserialize)]
pub struct ReadinessJson {
    pub status: String,
    pub checks: Value,
}
