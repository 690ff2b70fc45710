use super::OrbitModel;

/// Altitude above the ground in kilometres.
///
/// The orbit is modelled as a sphere, so the latitude does not enter the result.
pub fn altitude_km(model: &OrbitModel, _latitude: f64) -> f64 {
    model.orbit_radius_km - model.earth_radius_km
}
