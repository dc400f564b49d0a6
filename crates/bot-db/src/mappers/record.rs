//! DomainRecord entity <-> model mapper

use bot_core::entities::{DomainRecord, NewRecord, UserIdentity};
use bot_core::error::DomainError;
use bot_core::value_objects::RecordStatus;

use crate::models::RecordModel;

/// Convert RecordModel to DomainRecord entity
impl TryFrom<RecordModel> for DomainRecord {
    type Error = DomainError;

    fn try_from(model: RecordModel) -> Result<Self, Self::Error> {
        Ok(DomainRecord {
            id: model.id,
            bot: model.bot,
            kind: model.kind.parse()?,
            chat_id: model.chat_id,
            author: UserIdentity {
                id: model.telegram_user_id,
                username: model.telegram_username,
                first_name: model.first_name,
                last_name: model.last_name,
            },
            service: model.service,
            full_name: model.full_name,
            phone: model.phone,
            category: model.category,
            message: model.message,
            status: RecordStatus::from_stored(model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values of a NewRecord for database insertion
pub struct RecordInsert<'a> {
    pub bot: &'a str,
    pub kind: &'static str,
    pub telegram_user_id: i64,
    pub chat_id: i64,
    pub telegram_username: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub service: Option<&'a str>,
    pub full_name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub category: Option<&'a str>,
    pub message: Option<&'a str>,
    pub status: &'static str,
}

impl<'a> RecordInsert<'a> {
    pub fn new(record: &'a NewRecord) -> Self {
        Self {
            bot: &record.bot,
            kind: record.kind.as_str(),
            telegram_user_id: record.author.id,
            chat_id: record.chat_id,
            telegram_username: record.author.username.as_deref(),
            first_name: record.author.first_name.as_deref(),
            last_name: record.author.last_name.as_deref(),
            service: record.service.as_deref(),
            full_name: record.full_name.as_deref(),
            phone: record.phone.as_deref(),
            category: record.category.as_deref(),
            message: record.message.as_deref(),
            status: RecordStatus::NEW,
        }
    }
}
