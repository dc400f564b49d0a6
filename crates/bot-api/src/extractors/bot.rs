//! Bot path extractor
//!
//! Resolves the `{bot}` path segment to a mounted bot, or 404.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use bot_core::DomainError;
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::{AppState, BotHandle};

#[derive(Debug, Deserialize)]
struct BotPath {
    bot: String,
}

/// A bot that is mounted on this server
#[derive(Debug, Clone)]
pub struct MountedBot(pub BotHandle);

#[async_trait]
impl FromRequestParts<AppState> for MountedBot {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(BotPath { bot }) = Path::<BotPath>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::from(DomainError::UnknownBot(raw_bot_segment(parts.uri.path()))))?;

        state
            .bot(&bot)
            .cloned()
            .map(MountedBot)
            .ok_or_else(|| DomainError::UnknownBot(bot).into())
    }
}

/// The undecoded `{bot}` segment of `/bots/{bot}/...`
fn raw_bot_segment(path: &str) -> String {
    path.split('/').nth(2).unwrap_or_default().to_string()
}
