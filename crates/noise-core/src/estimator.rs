//! Per-position noise estimates for a given aircraft type.

use crate::attenuation::{calculate_ground_noise, geometric_attenuation_db, round_tenth};
use crate::models::{
    AircraftCategory, Direction, NoiseEstimate, NoiseProfile, ObserverLocation, TrackPosition,
};
use crate::profiles::ProfileResolver;

/// Estimate the level at `observer` produced by one track sample.
pub fn estimate_at_position(
    resolver: &ProfileResolver,
    type_code: &str,
    position: &TrackPosition,
    observer: &ObserverLocation,
    direction: Direction,
    category_hint: Option<AircraftCategory>,
) -> NoiseEstimate {
    let profile = resolver.resolve_profile(type_code, category_hint);
    estimate_with_profile(&profile, position, observer, direction)
}

/// Same as [`estimate_at_position`] with the profile already resolved.
pub(crate) fn estimate_with_profile(
    profile: &NoiseProfile,
    position: &TrackPosition,
    observer: &ObserverLocation,
    direction: Direction,
) -> NoiseEstimate {
    let mut estimate = calculate_ground_noise(
        profile.source_level_db(direction),
        position.altitude_ft,
        observer.lat,
        observer.lon,
        position.latitude,
        position.longitude,
        position.heading_deg,
    );

    estimate.source = profile.data_source.into();
    estimate.confidence = profile.confidence;
    if !profile.is_certified() {
        estimate.warning = Some(format!(
            "No certified noise data for {}. Using {} average.",
            profile.type_code, profile.category
        ));
    }
    estimate
}

/// Rough estimate when no track is available: the aircraft is assumed to be
/// directly overhead at `altitude_ft`, and only spreading loss is applied.
pub fn simple_noise_estimate(
    resolver: &ProfileResolver,
    type_code: &str,
    altitude_ft: f64,
    direction: Direction,
    category_hint: Option<AircraftCategory>,
) -> NoiseEstimate {
    let profile = resolver.resolve_profile(type_code, category_hint);
    let source_db = profile.source_level_db(direction);
    let ground_db = round_tenth(source_db - geometric_attenuation_db(altitude_ft)).max(0.0);

    NoiseEstimate {
        db: ground_db,
        source: profile.data_source.into(),
        confidence: profile.confidence,
        warning: (!profile.is_certified())
            .then(|| format!("Using category estimate for {}", profile.type_code)),
        slant_distance_ft: None,
        horizontal_distance_ft: None,
        geometric_attenuation_db: None,
        atmospheric_attenuation_db: None,
        lateral_attenuation_db: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confidence, EstimateSource};
    use chrono::{TimeZone, Utc};

    fn wainscott() -> ObserverLocation {
        ObserverLocation::new("wainscott-main", "Wainscott Main Street", 40.9445, -72.2337)
    }

    fn overhead(altitude_ft: f64) -> TrackPosition {
        let ts = Utc.with_ymd_and_hms(2025, 7, 4, 18, 0, 0).unwrap();
        TrackPosition::new(ts, 40.9445, -72.2337, altitude_ft).with_heading(280.0)
    }

    #[test]
    fn arrival_uses_approach_level() {
        let resolver = ProfileResolver::builtin().unwrap();
        let arrival = estimate_at_position(
            &resolver,
            "S76",
            &overhead(1000.0),
            &wainscott(),
            Direction::Arrival,
            None,
        );
        let departure = estimate_at_position(
            &resolver,
            "S76",
            &overhead(1000.0),
            &wainscott(),
            Direction::Departure,
            None,
        );

        // At the reference distance only absorption (0.5 dB) applies
        assert_eq!(arrival.db, 84.5);
        assert_eq!(departure.db, 87.5);
        assert_eq!(arrival.source, EstimateSource::Certified);
        assert_eq!(arrival.confidence, Confidence::High);
        assert!(arrival.warning.is_none());
    }

    #[test]
    fn uncertified_type_carries_warning() {
        let resolver = ProfileResolver::builtin().unwrap();
        let estimate = estimate_at_position(
            &resolver,
            "zzzz",
            &overhead(1000.0),
            &wainscott(),
            Direction::Departure,
            Some(AircraftCategory::Helicopter),
        );

        assert_eq!(estimate.source, EstimateSource::CategoryEstimate);
        assert_eq!(estimate.confidence, Confidence::Low);
        let warning = estimate.warning.unwrap();
        assert!(warning.contains("ZZZZ"));
        assert!(warning.contains("helicopter"));
        assert!(estimate.slant_distance_ft.is_some());
    }

    #[test]
    fn simple_estimate_has_no_diagnostics() {
        let resolver = ProfileResolver::builtin().unwrap();
        let estimate =
            simple_noise_estimate(&resolver, "GLF5", 500.0, Direction::Departure, None);

        // 89 - 20*log10(0.5)
        assert_eq!(estimate.db, 95.0);
        assert!(estimate.slant_distance_ft.is_none());
        assert!(estimate.lateral_attenuation_db.is_none());
        assert!(estimate.warning.is_none());
    }

    #[test]
    fn simple_estimate_floors_altitude() {
        let resolver = ProfileResolver::empty();
        let on_ground = simple_noise_estimate(&resolver, "X", 0.0, Direction::Arrival, None);
        let at_floor = simple_noise_estimate(&resolver, "X", 100.0, Direction::Arrival, None);

        assert_eq!(on_ground.db, at_floor.db);
        assert_eq!(on_ground.db, 96.0);
        assert_eq!(
            on_ground.warning.as_deref(),
            Some("Using category estimate for X")
        );
    }
}
