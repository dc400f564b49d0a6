//! Messenger that records instead of sending

use async_trait::async_trait;
use parking_lot::Mutex;

use bot_core::error::DeliveryError;
use bot_core::traits::Messenger;
use bot_core::value_objects::OutgoingMessage;

/// Captures every outbound call. A failing messenger still records the
/// attempt before returning an error.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<OutgoingMessage>>,
    acknowledged: Mutex<Vec<String>>,
    failing: bool,
}

impl RecordingMessenger {
    /// A messenger whose platform rejects every call
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Messages sent so far
    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().clone()
    }

    /// Callback ids answered so far
    pub fn acknowledged(&self) -> Vec<String> {
        self.acknowledged.lock().clone()
    }

    fn outcome(&self) -> Result<(), DeliveryError> {
        if self.failing {
            return Err(DeliveryError::Rejected {
                status: 502,
                description: "Bad Gateway".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError> {
        self.sent.lock().push(message.clone());
        self.outcome()
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), DeliveryError> {
        self.acknowledged.lock().push(callback_id.to_string());
        self.outcome()
    }
}
