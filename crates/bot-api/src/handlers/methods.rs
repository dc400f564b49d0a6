//! Method handling shared by the bot routes

use axum::http::StatusCode;
use bot_common::AppError;

use crate::response::ApiError;

/// OPTIONS on a bot route: 200 with an empty body.
///
/// The CORS layer adds the allow headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method a bot route does not serve
pub async fn method_not_allowed() -> ApiError {
    AppError::MethodNotAllowed.into()
}
