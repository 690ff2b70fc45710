/// Great-circle distance in kilometres between two points given in degrees,
/// measured on a sphere of `radius_km`.
///
/// Inputs are not range-checked; any finite value is accepted.
pub fn haversine_km(radius_km: f64, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = lon2.to_radians() - lon1.to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can leave `a` just outside [0, 1] near antipodes.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius_km * c
}
