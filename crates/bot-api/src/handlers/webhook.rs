//! Webhook handler
//!
//! One Telegram update per request. Anything that gets past the body parse
//! is answered with `{"ok": true}`, including updates that were dropped or
//! ignored, so Telegram never redelivers them.

use axum::{body::Bytes, extract::State, Json};
use bot_service::dto::WebhookAck;
use bot_service::DialogEngine;
use bot_telegram::{parse_update, RawUpdate};
use tracing::{debug, instrument};

use crate::extractors::MountedBot;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Receive an update
///
/// POST /bots/:bot/webhook
#[instrument(skip(state, bot, body), fields(bot = bot.0.profile.name))]
pub async fn receive_update(
    State(state): State<AppState>,
    bot: MountedBot,
    body: Bytes,
) -> ApiResult<Json<WebhookAck>> {
    let MountedBot(handle) = bot;

    let raw: RawUpdate =
        serde_json::from_slice(&body).map_err(|e| ApiError::invalid_body(e.to_string()))?;

    let outcome = DialogEngine::new(
        state.service_context(),
        handle.profile,
        handle.messenger.as_ref(),
    )
    .handle(parse_update(raw))
    .await?;
    debug!(?outcome, "Update processed");

    Ok(Json(WebhookAck::ok()))
}
