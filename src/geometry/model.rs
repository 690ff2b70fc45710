use serde::Deserialize;

const ISS_ORBIT_RADIUS_KM: f64 = 6779.0;
const EARTH_RADIUS_KM: f64 = 6371.0;
const KM_TO_MI: f64 = 0.621_371;
const AVERAGE_SPEED_KPH: f64 = 27_600.0;
const ORBITAL_PERIOD_MINUTES: f64 = 93.0;

/// Fixed orbital parameters shared by every request.
///
/// Built once at startup and never mutated afterwards. Any field missing
/// from the config file falls back to the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitModel {
    pub orbit_radius_km: f64,
    pub earth_radius_km: f64,
    pub km_to_mi: f64,
    pub average_speed_kph: f64,
    pub orbital_period_minutes: f64,
}

impl Default for OrbitModel {
    fn default() -> Self {
        Self {
            orbit_radius_km: ISS_ORBIT_RADIUS_KM,
            earth_radius_km: EARTH_RADIUS_KM,
            km_to_mi: KM_TO_MI,
            average_speed_kph: AVERAGE_SPEED_KPH,
            orbital_period_minutes: ORBITAL_PERIOD_MINUTES,
        }
    }
}
