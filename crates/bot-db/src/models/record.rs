//! Dialog record database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for dialog_records table
#[derive(Debug, Clone, FromRow)]
pub struct RecordModel {
    pub id: i64,
    pub bot: String,
    pub kind: String,
    pub telegram_user_id: i64,
    pub chat_id: i64,
    pub telegram_username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub service: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecordModel {
    /// Check if the record is still untouched by an administrator
    #[inline]
    pub fn is_new(&self) -> bool {
        self.status == "new"
    }
}
