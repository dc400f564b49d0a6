//! Best-effort outbound replies

use tracing::warn;

use bot_core::traits::Messenger;
use bot_core::value_objects::OutgoingMessage;

/// Sends replies and callback acknowledgements without ever failing the
/// invocation. Writes that already happened stay committed.
pub struct ReplyDispatcher<'a> {
    messenger: &'a dyn Messenger,
}

impl<'a> ReplyDispatcher<'a> {
    pub fn new(messenger: &'a dyn Messenger) -> Self {
        Self { messenger }
    }

    /// Returns whether the platform accepted the message
    pub async fn send(&self, message: &OutgoingMessage) -> bool {
        match self.messenger.send_message(message).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    chat_id = message.chat_id,
                    rejected = e.is_rejection(),
                    error = %e,
                    "Failed to deliver reply"
                );
                false
            }
        }
    }

    /// Returns whether the platform accepted the acknowledgement
    pub async fn acknowledge(&self, callback_id: &str) -> bool {
        match self.messenger.answer_callback(callback_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    callback_id,
                    rejected = e.is_rejection(),
                    error = %e,
                    "Failed to answer callback"
                );
                false
            }
        }
    }
}
