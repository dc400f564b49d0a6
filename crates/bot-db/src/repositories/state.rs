//! PostgreSQL implementation of StateStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bot_core::entities::DialogState;
use bot_core::traits::{RepoResult, StateStore};

use crate::mappers::state_or_idle;
use crate::models::ConversationStateModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StateStore
#[derive(Clone)]
pub struct PgStateStore {
    pool: PgPool,
}

impl PgStateStore {
    /// Create a new PgStateStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateStore for PgStateStore {
    #[instrument(skip(self))]
    async fn get(&self, bot: &str, user_id: i64) -> RepoResult<Option<DialogState>> {
        let result = sqlx::query_as::<_, ConversationStateModel>(
            r"
            SELECT bot, user_id, state, updated_at
            FROM conversation_states
            WHERE bot = $1 AND user_id = $2
            ",
        )
        .bind(bot)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.and_then(state_or_idle))
    }

    #[instrument(skip(self))]
    async fn set(&self, bot: &str, user_id: i64, state: DialogState) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO conversation_states (bot, user_id, state, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (bot, user_id)
            DO UPDATE SET state = EXCLUDED.state, updated_at = NOW()
            ",
        )
        .bind(bot)
        .bind(user_id)
        .bind(state.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self, bot: &str, user_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM conversation_states
            WHERE bot = $1 AND user_id = $2
            ",
        )
        .bind(bot)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
