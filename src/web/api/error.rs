use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::feed::FeedError;
use crate::geometry::SpeedError;

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    InvalidInterval(SpeedError),
    Feed(FeedError),
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}

impl From<SpeedError> for ApiError {
    fn from(e: SpeedError) -> Self {
        ApiError::InvalidInterval(e)
    }
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        ApiError::Feed(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("validation_failed", &msg)),
            )
                .into_response(),
            ApiError::InvalidInterval(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message(
                    "invalid_time_interval",
                    &e.to_string(),
                )),
            )
                .into_response(),
            ApiError::Feed(e) if e.is_unavailable() => {
                log::warn!("Position feed unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse::with_message(
                        "upstream_unavailable",
                        &e.to_string(),
                    )),
                )
                    .into_response()
            }
            ApiError::Feed(e) => {
                log::error!("Position feed returned bad data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_message("upstream_error", &e.to_string())),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_message("internal_error", &msg)),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
