//! Whole-flight noise impact across a set of observers.

use crate::attenuation::round_tenth;
use crate::estimator::estimate_with_profile;
use crate::models::{
    AircraftCategory, Direction, FlightNoiseImpact, NoiseProfile, NoiseProfileSummary,
    ObserverImpact, ObserverLocation, TrackPosition,
};
use crate::profiles::ProfileResolver;
use serde::{Deserialize, Serialize};

/// Threshold for `time_above_65db`.
pub const MODERATE_THRESHOLD_DB: f64 = 65.0;
/// Threshold for `time_above_75db`.
pub const LOUD_THRESHOLD_DB: f64 = 75.0;

/// Track sampling assumptions for exposure accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Nominal seconds between track samples (FlightAware reports ~5 s)
    pub position_interval_secs: f64,
    /// A gap is irregular when it is more than this factor above or below
    /// the nominal interval
    pub gap_tolerance_factor: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            position_interval_secs: 5.0,
            gap_tolerance_factor: 2.0,
        }
    }
}

/// Calculate noise impact for an entire flight track across all observers.
///
/// The first observer is the primary one: whole-track max/avg levels are
/// taken from its perspective. Every observer then gets an independent pass
/// over the track for peak level, closest approach and time above
/// threshold. Exposure times are sample counts multiplied by the configured
/// interval; actual timestamp spacing is only reported through
/// `track_duration_seconds` and `irregular_sampling`.
#[allow(clippy::too_many_arguments)]
pub fn calculate_flight_noise_impact(
    resolver: &ProfileResolver,
    config: &ImpactConfig,
    flight_id: &str,
    type_code: &str,
    track: &[TrackPosition],
    direction: Direction,
    category_hint: Option<AircraftCategory>,
    observers: &[ObserverLocation],
) -> FlightNoiseImpact {
    let profile = resolver.resolve_profile(type_code, category_hint);
    let interval = config.position_interval_secs;

    let (max_db, avg_db) = match observers.first() {
        Some(primary) => {
            let levels: Vec<f64> = track
                .iter()
                .map(|position| estimate_with_profile(&profile, position, primary, direction).db)
                .collect();
            summarize_levels(&levels)
        }
        None => {
            tracing::warn!(flight_id, "no observers configured, skipping noise summary");
            (0.0, 0.0)
        }
    };

    let observer_impacts = observers
        .iter()
        .map(|observer| observer_impact(&profile, track, observer, direction, interval))
        .collect();

    let (track_duration_seconds, irregular_sampling) = sampling_summary(track, config);
    if irregular_sampling {
        tracing::warn!(
            flight_id,
            samples = track.len(),
            track_duration_seconds,
            "track spacing departs from nominal interval; exposure uses sample counts"
        );
    }

    FlightNoiseImpact {
        flight_id: flight_id.to_string(),
        aircraft_type: type_code.to_string(),
        direction,
        noise_profile: NoiseProfileSummary::from(&profile),
        max_ground_db: round_tenth(max_db),
        avg_ground_db: round_tenth(avg_db),
        exposure_seconds: track.len() as f64 * interval,
        track_count: track.len(),
        track_duration_seconds,
        irregular_sampling,
        observer_impacts,
    }
}

fn summarize_levels(levels: &[f64]) -> (f64, f64) {
    if levels.is_empty() {
        return (0.0, 0.0);
    }
    let max = levels.iter().copied().fold(0.0, f64::max);
    let avg = levels.iter().sum::<f64>() / levels.len() as f64;
    (max, avg)
}

fn observer_impact(
    profile: &NoiseProfile,
    track: &[TrackPosition],
    observer: &ObserverLocation,
    direction: Direction,
    interval: f64,
) -> ObserverImpact {
    let mut max_db: f64 = 0.0;
    let mut closest_ft: Option<f64> = None;
    let mut samples_above_moderate = 0usize;
    let mut samples_above_loud = 0usize;

    for position in track {
        let estimate = estimate_with_profile(profile, position, observer, direction);

        max_db = max_db.max(estimate.db);
        if let Some(slant) = estimate.slant_distance_ft {
            closest_ft = Some(closest_ft.map_or(slant, |closest| closest.min(slant)));
        }
        if estimate.db >= MODERATE_THRESHOLD_DB {
            samples_above_moderate += 1;
        }
        if estimate.db >= LOUD_THRESHOLD_DB {
            samples_above_loud += 1;
        }
    }

    ObserverImpact {
        observer_id: observer.id.clone(),
        observer_name: observer.name.clone(),
        max_db: round_tenth(max_db),
        closest_approach_ft: closest_ft.unwrap_or(0.0),
        time_above_65db: samples_above_moderate as f64 * interval,
        time_above_75db: samples_above_loud as f64 * interval,
    }
}

/// Elapsed seconds first to last sample, and whether any gap between
/// consecutive samples falls outside the tolerated band.
fn sampling_summary(track: &[TrackPosition], config: &ImpactConfig) -> (f64, bool) {
    let (Some(first), Some(last)) = (track.first(), track.last()) else {
        return (0.0, false);
    };
    let duration = seconds_between(first, last).max(0.0);

    let interval = config.position_interval_secs;
    if !(interval.is_finite() && interval > 0.0) {
        return (duration, false);
    }
    let factor = config.gap_tolerance_factor.max(1.0);
    let (lo, hi) = (interval / factor, interval * factor);

    let irregular = track.windows(2).any(|pair| {
        let gap = seconds_between(&pair[0], &pair[1]);
        gap < lo || gap > hi
    });
    (duration, irregular)
}

fn seconds_between(from: &TrackPosition, to: &TrackPosition) -> f64 {
    (to.timestamp - from.timestamp).num_milliseconds() as f64 / 1000.0
}
