//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bot_core::entities::{BotUser, UserIdentity};
use bot_core::traits::{RepoResult, UserRepository};

use crate::models::BotUserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    // Profile fields are written on first contact only; later updates
    // just bump last_activity_at.
    #[instrument(skip(self, identity), fields(user_id = identity.id))]
    async fn upsert(&self, identity: &UserIdentity) -> RepoResult<BotUser> {
        let model = sqlx::query_as::<_, BotUserModel>(
            r"
            INSERT INTO bot_users (telegram_user_id, username, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (telegram_user_id)
            DO UPDATE SET last_activity_at = NOW()
            RETURNING telegram_user_id, username, first_name, last_name,
                      first_seen_at, last_activity_at
            ",
        )
        .bind(identity.id)
        .bind(&identity.username)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(BotUser::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BotUser>> {
        let result = sqlx::query_as::<_, BotUserModel>(
            r"
            SELECT telegram_user_id, username, first_name, last_name,
                   first_seen_at, last_activity_at
            FROM bot_users
            WHERE telegram_user_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BotUser::from))
    }
}
