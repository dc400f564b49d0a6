//! BotUser entity <-> model mapper

use bot_core::entities::{BotUser, UserIdentity};

use crate::models::BotUserModel;

/// Convert BotUserModel to BotUser entity
impl From<BotUserModel> for BotUser {
    fn from(model: BotUserModel) -> Self {
        BotUser {
            identity: UserIdentity {
                id: model.telegram_user_id,
                username: model.username,
                first_name: model.first_name,
                last_name: model.last_name,
            },
            first_seen_at: model.first_seen_at,
            last_activity_at: model.last_activity_at,
        }
    }
}
