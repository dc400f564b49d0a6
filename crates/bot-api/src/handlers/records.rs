//! Admin record handlers

use axum::{extract::State, Json};
use bot_service::dto::{DeleteRecordRequest, RecordListResponse, SuccessResponse, UpdateStatusRequest};
use bot_service::RecordService;

use crate::extractors::{MountedBot, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List a bot's records, newest first
///
/// GET /bots/:bot/orders
pub async fn list_records(
    State(state): State<AppState>,
    MountedBot(bot): MountedBot,
) -> ApiResult<Json<RecordListResponse>> {
    let service = RecordService::new(state.service_context());
    let response = service.list(bot.profile.name).await?;
    Ok(Json(response))
}

/// Change a record's status
///
/// PUT /bots/:bot/orders
pub async fn update_record_status(
    State(state): State<AppState>,
    MountedBot(bot): MountedBot,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = RecordService::new(state.service_context());
    let response = service.update_status(bot.profile.name, request).await?;
    Ok(Json(response))
}

/// Remove a record
///
/// DELETE /bots/:bot/orders
pub async fn delete_record(
    State(state): State<AppState>,
    MountedBot(bot): MountedBot,
    ValidatedJson(request): ValidatedJson<DeleteRecordRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = RecordService::new(state.service_context());
    let response = service.delete(bot.profile.name, request).await?;
    Ok(Json(response))
}
