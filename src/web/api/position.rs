use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::geometry::{altitude_km, GeoPosition, OrbitModel};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: i64,
    /// `timestamp` as RFC 3339 in UTC
    pub datetime: String,
    pub altitude_km: f64,
}

impl CurrentPosition {
    fn from_sample(model: &OrbitModel, sample: GeoPosition) -> ApiResult<Self> {
        let datetime = DateTime::<Utc>::from_timestamp(sample.timestamp, 0).ok_or_else(|| {
            ApiError::Internal(format!("timestamp {} is out of range", sample.timestamp))
        })?;

        Ok(CurrentPosition {
            latitude: sample.latitude,
            longitude: sample.longitude,
            timestamp: sample.timestamp,
            datetime: datetime.to_rfc3339(),
            altitude_km: altitude_km(model, sample.latitude),
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/iss/current",
    responses(
        (status = 200, description = "Current position of the station", body = CurrentPosition),
        (status = 500, description = "Upstream returned unusable data", body = ErrorResponse),
        (status = 503, description = "Upstream feed unreachable", body = ErrorResponse)
    ),
    tag = "iss"
)]
pub async fn current(State(state): State<AppState>) -> ApiResult<Json<CurrentPosition>> {
    let sample = state.feed.current_position().await?;
    log::debug!(
        "Fetched position {:.4},{:.4} at {}",
        sample.latitude,
        sample.longitude,
        sample.timestamp
    );
    Ok(Json(CurrentPosition::from_sample(state.model(), sample)?))
}
