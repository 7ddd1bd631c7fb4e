use super::{Coordinates, DistanceUnit};

/// Haversine distance between two lat/lon points (degrees), in `unit`.
///
/// Total over all inputs: out-of-range coordinates still produce a number and
/// a NaN input propagates as NaN.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    unit.earth_radius() * c
}

/// [`distance`] over a pair of [`Coordinates`].
pub fn distance_between(from: Coordinates, to: Coordinates, unit: DistanceUnit) -> f64 {
    distance(
        from.latitude,
        from.longitude,
        to.latitude,
        to.longitude,
        unit,
    )
}
