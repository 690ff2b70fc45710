use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::geometry::altitude_km;
use crate::web::state::AppState;

/// Constants of the orbit model, reported as-is.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub orbit_radius_km: f64,
    pub average_altitude_km: f64,
    pub earth_radius_km: f64,
    pub km_to_mi: f64,
    pub average_speed_kph: f64,
    pub orbital_period_minutes: f64,
    pub astronauts_endpoint: String,
}

#[utoipa::path(
    get,
    path = "/api/iss/stats",
    responses(
        (status = 200, description = "Orbit constants", body = StatsResponse)
    ),
    tag = "iss"
)]
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let model = state.model();
    Json(StatsResponse {
        orbit_radius_km: model.orbit_radius_km,
        average_altitude_km: altitude_km(model, 0.0),
        earth_radius_km: model.earth_radius_km,
        km_to_mi: model.km_to_mi,
        average_speed_kph: model.average_speed_kph,
        orbital_period_minutes: model.orbital_period_minutes,
        astronauts_endpoint: state.config.feed.astronauts_url.clone(),
    })
}
