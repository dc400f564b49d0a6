//! PostgreSQL implementation of RecordRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bot_core::entities::{DomainRecord, NewRecord};
use bot_core::traits::{RecordRepository, RepoResult};
use bot_core::value_objects::RecordStatus;

use crate::mappers::RecordInsert;
use crate::models::RecordModel;

use super::error::{map_db_error, map_foreign_key_violation, record_not_found, user_not_found};

const RECORD_COLUMNS: &str = r"
    id, bot, kind, telegram_user_id, chat_id, telegram_username, first_name, last_name,
    service, full_name, phone, category, message, status, created_at, updated_at
";

/// PostgreSQL implementation of RecordRepository
#[derive(Clone)]
pub struct PgRecordRepository {
    pool: PgPool,
}

impl PgRecordRepository {
    /// Create a new PgRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_records(models: Vec<RecordModel>) -> RepoResult<Vec<DomainRecord>> {
    models.into_iter().map(DomainRecord::try_from).collect()
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    #[instrument(skip(self, record), fields(bot = %record.bot, kind = %record.kind))]
    async fn create(&self, record: &NewRecord) -> RepoResult<DomainRecord> {
        let insert = RecordInsert::new(record);
        let sql = format!(
            r"
            INSERT INTO dialog_records (
                bot, kind, telegram_user_id, chat_id, telegram_username, first_name, last_name,
                service, full_name, phone, category, message, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {RECORD_COLUMNS}
            "
        );

        let model = sqlx::query_as::<_, RecordModel>(&sql)
            .bind(insert.bot)
            .bind(insert.kind)
            .bind(insert.telegram_user_id)
            .bind(insert.chat_id)
            .bind(insert.telegram_username)
            .bind(insert.first_name)
            .bind(insert.last_name)
            .bind(insert.service)
            .bind(insert.full_name)
            .bind(insert.phone)
            .bind(insert.category)
            .bind(insert.message)
            .bind(insert.status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || user_not_found(insert.telegram_user_id)))?;

        DomainRecord::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<DomainRecord>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM dialog_records WHERE id = $1");

        let result = sqlx::query_as::<_, RecordModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(DomainRecord::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, bot: Option<&str>) -> RepoResult<Vec<DomainRecord>> {
        let sql = format!(
            r"
            SELECT {RECORD_COLUMNS}
            FROM dialog_records
            WHERE $1::TEXT IS NULL OR bot = $1
            ORDER BY created_at DESC, id DESC
            "
        );

        let models = sqlx::query_as::<_, RecordModel>(&sql)
            .bind(bot)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_records(models)
    }

    #[instrument(skip(self))]
    async fn list_for_user(
        &self,
        bot: &str,
        user_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<DomainRecord>> {
        let sql = format!(
            r"
            SELECT {RECORD_COLUMNS}
            FROM dialog_records
            WHERE bot = $1 AND telegram_user_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            "
        );

        let models = sqlx::query_as::<_, RecordModel>(&sql)
            .bind(bot)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_records(models)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: &RecordStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE dialog_records
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(record_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM dialog_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(record_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
