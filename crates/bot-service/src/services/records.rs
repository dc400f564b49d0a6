//! Record service
//!
//! Admin operations on stored records. Every operation is scoped to one bot:
//! a record owned by another bot is reported as not found.

use tracing::{info, instrument};

use bot_core::entities::DomainRecord;
use bot_core::error::DomainError;
use bot_core::value_objects::RecordStatus;

use crate::dto::{DeleteRecordRequest, RecordListResponse, SuccessResponse, UpdateStatusRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Record service
pub struct RecordService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecordService<'a> {
    /// Create a new RecordService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All records of a bot, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, bot: &str) -> ServiceResult<RecordListResponse> {
        let records = self.ctx.record_repo().list(Some(bot)).await?;
        Ok(RecordListResponse::new(records))
    }

    /// Set a record's status
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        bot: &str,
        request: UpdateStatusRequest,
    ) -> ServiceResult<SuccessResponse> {
        let (Some(id), Some(status)) = (request.id, request.status) else {
            return Err(ServiceError::validation("Missing id or status"));
        };
        let status = RecordStatus::parse(&status)?;

        self.get_owned(bot, id).await?;
        self.ctx.record_repo().update_status(id, &status).await?;

        info!(record_id = id, status = %status, "Record status updated");
        Ok(SuccessResponse::ok())
    }

    /// Remove a record
    #[instrument(skip(self, request))]
    pub async fn delete(
        &self,
        bot: &str,
        request: DeleteRecordRequest,
    ) -> ServiceResult<SuccessResponse> {
        let id = request
            .id
            .ok_or_else(|| ServiceError::validation("Missing id"))?;

        self.get_owned(bot, id).await?;
        self.ctx.record_repo().delete(id).await?;

        info!(record_id = id, "Record deleted");
        Ok(SuccessResponse::ok())
    }

    async fn get_owned(&self, bot: &str, id: i64) -> ServiceResult<DomainRecord> {
        self.ctx
            .record_repo()
            .find_by_id(id)
            .await?
            .filter(|record| record.bot == bot)
            .ok_or_else(|| DomainError::RecordNotFound(id).into())
    }
}
