//! Bot user database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bot_users table
#[derive(Debug, Clone, FromRow)]
pub struct BotUserModel {
    pub telegram_user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub first_seen_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}
