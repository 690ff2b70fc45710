use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single timestamped sample of the station's ground track.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Unix seconds
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SpeedResult {
    #[serde(rename = "km_per_second")]
    pub speed_km_per_s: f64,
    #[serde(rename = "km_per_hour")]
    pub speed_km_per_h: f64,
    #[serde(rename = "miles_per_hour")]
    pub speed_mi_per_h: f64,
    #[serde(rename = "distance_traveled_km")]
    pub distance_km: f64,
    #[serde(rename = "time_elapsed_seconds")]
    pub elapsed_seconds: i64,
}
