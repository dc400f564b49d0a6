//! Conversation state database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for conversation_states table
#[derive(Debug, Clone, FromRow)]
pub struct ConversationStateModel {
    pub bot: String,
    pub user_id: i64,
    pub state: String,
    pub updated_at: DateTime<Utc>,
}
