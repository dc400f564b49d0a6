//! Messenger trait (port) - outbound calls to the messaging platform

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::value_objects::OutgoingMessage;

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver a message to a chat
    async fn send_message(&self, message: &OutgoingMessage) -> Result<(), DeliveryError>;

    /// Acknowledge a button press so the client stops its spinner
    async fn answer_callback(&self, callback_id: &str) -> Result<(), DeliveryError>;
}
