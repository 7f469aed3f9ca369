//! Spherical geometry for aircraft-to-observer distances.
//!
//! All distances are in feet, the unit of both the certification reference
//! distance and FlightAware altitudes.

/// Mean Earth radius in feet (6371 km).
pub const EARTH_RADIUS_FT: f64 = 20_902_230.97;

/// Below this horizontal separation the observer is treated as directly
/// beneath the aircraft and bearing is meaningless.
const OVERHEAD_TOLERANCE_FT: f64 = 1.0;

/// Calculate great-circle distance between two points in feet using the
/// Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
pub fn horizontal_distance_ft(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_FT * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Straight-line acoustic path length from altitude and ground distance.
///
/// Treats the Earth as locally flat, which is fine at airport scale.
pub fn slant_distance_ft(altitude_ft: f64, horizontal_ft: f64) -> f64 {
    altitude_ft.hypot(horizontal_ft)
}

/// Initial bearing from point 1 to point 2 in degrees, 0 = north, 90 = east.
/// Result is in `[0, 360)`.
pub fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_deg(x.atan2(y).to_degrees())
}

/// Angle between the aircraft's ground track and the direction from the
/// aircraft to the observer, folded into `[0, 90]`.
///
/// Differences past 180 wrap around; anything past 90 (abeam or behind the
/// aircraft) clamps to 90 since the directivity table stops there.
pub fn lateral_angle_deg(
    observer_lat: f64,
    observer_lon: f64,
    aircraft_lat: f64,
    aircraft_lon: f64,
    heading_deg: f64,
) -> f64 {
    let separation =
        horizontal_distance_ft(aircraft_lat, aircraft_lon, observer_lat, observer_lon);
    if separation < OVERHEAD_TOLERANCE_FT {
        return 0.0;
    }

    let to_observer = bearing_deg(aircraft_lat, aircraft_lon, observer_lat, observer_lon);
    let mut diff = (to_observer - normalize_deg(heading_deg)).abs();
    if diff > 180.0 {
        diff = 360.0 - diff;
    }
    diff.min(90.0)
}

fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAINSCOTT: (f64, f64) = (40.9445, -72.2337);
    const BEACH_LANE: (f64, f64) = (40.9312, -72.2389);

    #[test]
    fn test_horizontal_distance_known_distance() {
        // One degree of latitude is ~364,800 ft
        let dist = horizontal_distance_ft(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 364_812.0).abs() < 50.0, "got {dist}");
    }

    #[test]
    fn test_horizontal_distance_same_point() {
        let dist = horizontal_distance_ft(WAINSCOTT.0, WAINSCOTT.1, WAINSCOTT.0, WAINSCOTT.1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn horizontal_distance_is_symmetric() {
        let ab = horizontal_distance_ft(WAINSCOTT.0, WAINSCOTT.1, BEACH_LANE.0, BEACH_LANE.1);
        let ba = horizontal_distance_ft(BEACH_LANE.0, BEACH_LANE.1, WAINSCOTT.0, WAINSCOTT.1);
        assert!((ab - ba).abs() < 1e-6);
        assert!(ab > 4_000.0 && ab < 6_000.0, "got {ab}");
    }

    #[test]
    fn slant_distance_is_hypotenuse() {
        assert!((slant_distance_ft(300.0, 400.0) - 500.0).abs() < 1e-9);
        assert_eq!(slant_distance_ft(800.0, 0.0), 800.0);
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert!(bearing_deg(0.0, 0.0, 1.0, 0.0).abs() < 1e-9);
        assert!((bearing_deg(0.0, 0.0, 0.0, 1.0) - 90.0).abs() < 1e-9);
        assert!((bearing_deg(0.0, 0.0, -1.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((bearing_deg(0.0, 0.0, 0.0, -1.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn lateral_angle_directly_ahead_is_zero() {
        // Aircraft heading due north, observer due north of it
        let angle = lateral_angle_deg(41.0, -72.25, 40.95, -72.25, 0.0);
        assert!(angle < 1e-6, "got {angle}");
    }

    #[test]
    fn lateral_angle_wraps_across_north() {
        // Observer due north, heading 350: a 10 degree offset, not 350
        let angle = lateral_angle_deg(41.0, -72.25, 40.95, -72.25, 350.0);
        assert!((angle - 10.0).abs() < 1e-6, "got {angle}");
    }

    #[test]
    fn lateral_angle_abeam_and_behind_clamp_to_ninety() {
        let abeam = lateral_angle_deg(40.95, -72.20, 40.95, -72.25, 0.0);
        assert!((abeam - 90.0).abs() < 0.1, "got {abeam}");

        let behind = lateral_angle_deg(40.90, -72.25, 40.95, -72.25, 0.0);
        assert_eq!(behind, 90.0);
    }

    #[test]
    fn lateral_angle_overhead_is_zero() {
        let angle = lateral_angle_deg(WAINSCOTT.0, WAINSCOTT.1, WAINSCOTT.0, WAINSCOTT.1, 280.0);
        assert_eq!(angle, 0.0);
    }
}
