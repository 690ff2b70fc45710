use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::geometry::{calculate_speed, GeoPosition, SpeedResult};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SpeedRequest {
    pub pos1: Option<GeoPosition>,
    pub pos2: Option<GeoPosition>,
}

#[utoipa::path(
    post,
    path = "/api/iss/speed",
    request_body = SpeedRequest,
    responses(
        (status = 200, description = "Average speed between the two samples", body = SpeedResult),
        (status = 400, description = "Missing positions or non-positive interval", body = ErrorResponse)
    ),
    tag = "iss"
)]
pub async fn speed(
    State(state): State<AppState>,
    payload: Result<Json<SpeedRequest>, JsonRejection>,
) -> ApiResult<Json<SpeedResult>> {
    let Json(request) = payload?;

    let (Some(pos1), Some(pos2)) = (request.pos1, request.pos2) else {
        return Err(ApiError::Validation(
            "both pos1 and pos2 are required".into(),
        ));
    };

    let result = calculate_speed(state.model(), &pos1, &pos2)?;
    Ok(Json(result))
}
