//! Propagation model from a certified source level to a ground estimate.
//!
//! Three terms are subtracted from the source level:
//! - geometric spreading (inverse square law, referenced to 1000 ft)
//! - atmospheric absorption (flat 0.5 dB per 1000 ft, simplified ISO 9613-1)
//! - lateral directivity (SAE-AIR-5662 style table, needs a heading)

use crate::geometry::{horizontal_distance_ft, lateral_angle_deg, slant_distance_ft};
use crate::models::{Confidence, EstimateSource, NoiseEstimate};

/// Certification reference slant distance (304.8 m).
pub const REFERENCE_DISTANCE_FT: f64 = 1000.0;

/// A-weighted average absorption, dB per 1000 ft of path.
pub const ATMOSPHERIC_ABSORPTION_DB_PER_1000FT: f64 = 0.5;

/// Slant distances are floored here to avoid near-field blowup.
pub const MIN_SLANT_DISTANCE_FT: f64 = 100.0;

/// Lateral attenuation by angle off the ground track: (degrees, dB).
pub const LATERAL_ATTENUATION_TABLE: [(f64, f64); 10] = [
    (0.0, 0.0),
    (10.0, 0.5),
    (20.0, 1.2),
    (30.0, 2.5),
    (40.0, 4.0),
    (50.0, 5.5),
    (60.0, 7.0),
    (70.0, 8.5),
    (80.0, 9.5),
    (90.0, 10.0),
];

/// Interpolate the lateral attenuation table.
///
/// Angles outside `[0, 90]` saturate at the table endpoints.
pub fn lateral_attenuation_db(angle_deg: f64) -> f64 {
    if angle_deg.is_nan() {
        return 0.0;
    }
    let angle = angle_deg.clamp(0.0, 90.0);

    for pair in LATERAL_ATTENUATION_TABLE.windows(2) {
        let (lo_angle, lo_db) = pair[0];
        let (hi_angle, hi_db) = pair[1];
        if angle <= hi_angle {
            let ratio = (angle - lo_angle) / (hi_angle - lo_angle);
            return lo_db + ratio * (hi_db - lo_db);
        }
    }

    LATERAL_ATTENUATION_TABLE[LATERAL_ATTENUATION_TABLE.len() - 1].1
}

/// Inverse square spreading loss relative to the reference distance.
/// Negative when closer than 1000 ft.
pub fn geometric_attenuation_db(slant_ft: f64) -> f64 {
    20.0 * (slant_ft.max(MIN_SLANT_DISTANCE_FT) / REFERENCE_DISTANCE_FT).log10()
}

pub fn atmospheric_attenuation_db(slant_ft: f64) -> f64 {
    (slant_ft.max(MIN_SLANT_DISTANCE_FT) / 1000.0) * ATMOSPHERIC_ABSORPTION_DB_PER_1000FT
}

/// Estimate the ground level at an observer for one aircraft position.
///
/// The result is profile-agnostic: `source` is `Calculated` and the caller
/// is expected to stamp the profile's provenance on it.
pub fn calculate_ground_noise(
    source_db: f64,
    altitude_ft: f64,
    observer_lat: f64,
    observer_lon: f64,
    aircraft_lat: f64,
    aircraft_lon: f64,
    heading_deg: Option<f64>,
) -> NoiseEstimate {
    let horizontal_ft =
        horizontal_distance_ft(observer_lat, observer_lon, aircraft_lat, aircraft_lon);
    let slant_ft = slant_distance_ft(altitude_ft, horizontal_ft);
    let effective_slant_ft = slant_ft.max(MIN_SLANT_DISTANCE_FT);

    let geometric = geometric_attenuation_db(effective_slant_ft);
    let atmospheric = atmospheric_attenuation_db(effective_slant_ft);
    let lateral = heading_deg
        .map(|heading| {
            lateral_attenuation_db(lateral_angle_deg(
                observer_lat,
                observer_lon,
                aircraft_lat,
                aircraft_lon,
                heading,
            ))
        })
        .unwrap_or(0.0);

    let ground_db = round_tenth(source_db - geometric - atmospheric - lateral).max(0.0);

    NoiseEstimate {
        db: ground_db,
        source: EstimateSource::Calculated,
        confidence: Confidence::High,
        warning: None,
        slant_distance_ft: Some(slant_ft.round()),
        horizontal_distance_ft: Some(horizontal_ft.round()),
        geometric_attenuation_db: Some(round_tenth(geometric)),
        atmospheric_attenuation_db: Some(round_tenth(atmospheric)),
        lateral_attenuation_db: Some(round_tenth(lateral)),
    }
}

/// Round to 0.1 dB.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
