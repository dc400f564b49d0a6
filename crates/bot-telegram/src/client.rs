//! HTTP client for the Telegram Bot API.
//!
//! Provides [`TelegramClient`], the [`Messenger`] used in production. Each
//! call is attempted once; callers decide what a failure means.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use bot_core::error::DeliveryError;
use bot_core::traits::Messenger;
use bot_core::value_objects::OutgoingMessage;

use crate::types::{AnswerCallbackQueryRequest, ApiResponse, SendMessageRequest};

/// Public Bot API endpoint
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Bot API client bound to one bot token
#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl TelegramClient {
    /// Creates a client for the public API with the given request timeout.
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        })
    }

    /// Overrides the base URL (self-hosted Bot API server, or wiremock in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    async fn call<P: Serialize + Sync>(&self, method: &str, payload: &P) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(payload)
            .send()
            .await
            // reqwest errors embed the URL, which carries the token
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        debug!(method, status = %status, "Bot API response received");

        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ApiResponse>(&body).ok();

        if status.is_success() && parsed.as_ref().map_or(true, |r| r.ok) {
            return Ok(());
        }

        let description = parsed
            .and_then(|r| r.description)
            .unwrap_or_else(|| if body.is_empty() { status.to_string() } else { body });

        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            description,
        })
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    async fn send_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        if message.text.is_empty() {
            return Err(DeliveryError::InvalidRequest("message text is empty".to_string()));
        }
        self.call("sendMessage", &SendMessageRequest::from(message)).await
    }

    #[instrument(skip(self))]
    async fn answer_callback(&self, callback_id: &str) -> Result<(), DeliveryError> {
        self.call(
            "answerCallbackQuery",
            &AnswerCallbackQueryRequest {
                callback_query_id: callback_id,
            },
        )
        .await
    }
}
