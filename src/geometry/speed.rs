use super::{haversine_km, GeoPosition, OrbitModel, SpeedError, SpeedResult};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Average ground-track speed between two samples taken at the orbit radius.
pub fn calculate_speed(
    model: &OrbitModel,
    pos1: &GeoPosition,
    pos2: &GeoPosition,
) -> Result<SpeedResult, SpeedError> {
    let elapsed_seconds = pos2
        .timestamp
        .checked_sub(pos1.timestamp)
        .ok_or(SpeedError::IntervalOverflow {
            from: pos1.timestamp,
            to: pos2.timestamp,
        })?;
    if elapsed_seconds <= 0 {
        return Err(SpeedError::NonPositiveInterval { elapsed_seconds });
    }

    let distance = haversine_km(
        model.orbit_radius_km,
        pos1.latitude,
        pos1.longitude,
        pos2.latitude,
        pos2.longitude,
    );

    let speed_km_s = distance / elapsed_seconds as f64;
    let speed_km_h = speed_km_s * SECONDS_PER_HOUR;
    let speed_mi_h = speed_km_h * model.km_to_mi;

    Ok(SpeedResult {
        speed_km_per_s: round3(speed_km_s),
        speed_km_per_h: round2(speed_km_h),
        speed_mi_per_h: round2(speed_mi_h),
        distance_km: round2(distance),
        elapsed_seconds,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
