//! End-to-end noise impact tests over the public API.

use jpx_noise_core::{
    calculate_flight_noise_impact, calculate_ground_noise, classify_aircraft, default_observers,
    estimate_at_position, horizontal_distance_ft, AircraftCategory, Confidence, DataSource,
    Direction, ImpactConfig, ProfileResolver, TrackPosition,
};
use serde_json::json;

fn flightaware_track() -> Vec<TrackPosition> {
    // Helicopter arriving from the east along the runway 28 approach
    let positions = json!([
        { "timestamp": "2025-07-04T18:00:00Z", "latitude": 40.9520, "longitude": -72.1900, "altitude": 1500, "groundspeed": 110, "heading": 268 },
        { "timestamp": "2025-07-04T18:00:05Z", "latitude": 40.9530, "longitude": -72.2000, "altitude": 1350, "groundspeed": 105, "heading": 270 },
        { "timestamp": "2025-07-04T18:00:10Z", "latitude": 40.9545, "longitude": -72.2100, "altitude": 1200, "groundspeed": 100, "heading": 272 },
        { "timestamp": "2025-07-04T18:00:15Z", "latitude": 40.9560, "longitude": -72.2200, "altitude": 1000, "groundspeed": 95, "heading": 275 },
        { "timestamp": "2025-07-04T18:00:20Z", "latitude": 40.9575, "longitude": -72.2300, "altitude": 800, "groundspeed": 85, "heading": 278 },
        { "timestamp": "2025-07-04T18:00:25Z", "latitude": 40.9585, "longitude": -72.2380, "altitude": 600, "groundspeed": 70, "heading": 280 },
        { "timestamp": "2025-07-04T18:00:30Z", "latitude": 40.9590, "longitude": -72.2450, "altitude": 350, "groundspeed": 55 },
        { "timestamp": "2025-07-04T18:00:35Z", "latitude": 40.9590, "longitude": -72.2500, "altitude": 100, "groundspeed": 30 }
    ]);
    serde_json::from_value(positions).expect("track fixture parses")
}

#[test]
fn helicopter_arrival_impact_end_to_end() {
    let resolver = ProfileResolver::builtin().unwrap();
    let observers = default_observers();
    let track = flightaware_track();

    let impact = calculate_flight_noise_impact(
        &resolver,
        &ImpactConfig::default(),
        "N76XX-1720000000-airline-0001",
        "S76",
        &track,
        Direction::Arrival,
        Some(classify_aircraft("S76")),
        &observers,
    );

    assert_eq!(impact.track_count, 8);
    assert_eq!(impact.exposure_seconds, 40.0);
    assert_eq!(impact.track_duration_seconds, 35.0);
    assert!(!impact.irregular_sampling);
    assert_eq!(impact.noise_profile.data_source, DataSource::Certified);
    assert_eq!(impact.noise_profile.approach_db, 85.0);
    assert_eq!(impact.observer_impacts.len(), observers.len());

    // The runway 28 approach site sits almost under the final approach
    let approach = impact
        .observer_impacts
        .iter()
        .find(|record| record.observer_id == "runway-approach")
        .unwrap();
    let sagaponack = impact
        .observer_impacts
        .iter()
        .find(|record| record.observer_id == "sagaponack-south")
        .unwrap();
    assert!(approach.max_db > sagaponack.max_db);
    assert!(approach.closest_approach_ft < sagaponack.closest_approach_ft);
    assert!(approach.time_above_65db > 0.0);

    for record in &impact.observer_impacts {
        assert!(record.max_db >= 0.0);
        assert!(record.time_above_75db <= record.time_above_65db);
        assert!(record.time_above_65db <= impact.exposure_seconds);
    }
}

#[test]
fn impact_serializes_to_flat_json() {
    let resolver = ProfileResolver::builtin().unwrap();
    let impact = calculate_flight_noise_impact(
        &resolver,
        &ImpactConfig::default(),
        "FLT-1",
        "zzzz",
        &flightaware_track(),
        Direction::Departure,
        None,
        &default_observers(),
    );

    let value = serde_json::to_value(&impact).unwrap();
    assert_eq!(value["flight_id"], "FLT-1");
    assert_eq!(value["direction"], "departure");
    assert_eq!(value["noise_profile"]["data_source"], "unverified");
    assert_eq!(value["noise_profile"]["confidence"], "low");
    assert_eq!(value["noise_profile"]["takeoff_db"], 80.0);
    assert!(value["observer_impacts"][0]["time_above_65db"].is_number());
    assert!(value["max_ground_db"].is_number());
}

#[test]
fn unknown_type_with_unknown_hint_falls_back() {
    let resolver = ProfileResolver::builtin().unwrap();
    let profile = resolver.resolve_profile("ZZZZ", Some(AircraftCategory::from_hint("unknown")));

    assert_eq!(profile.data_source, DataSource::CategoryEstimate);
    assert_eq!(profile.confidence, Confidence::Low);
    assert_eq!(profile.takeoff_level_db, 80.0);
}

#[test]
fn ground_noise_is_non_negative_across_geometries() {
    let (obs_lat, obs_lon) = (40.9445, -72.2337);
    for altitude in [0.0, 10.0, 250.0, 2_500.0, 45_000.0] {
        for offset in [0.0, 0.001, 0.05, 1.0, 10.0] {
            for heading in [None, Some(0.0), Some(90.0), Some(359.9)] {
                let estimate = calculate_ground_noise(
                    60.0,
                    altitude,
                    obs_lat,
                    obs_lon,
                    obs_lat + offset,
                    obs_lon - offset,
                    heading,
                );
                assert!(estimate.db >= 0.0);
                assert!(estimate.geometric_attenuation_db.is_some());
            }
        }
    }
}

#[test]
fn distance_is_symmetric_between_observers() {
    let observers = default_observers();
    for a in &observers {
        assert_eq!(horizontal_distance_ft(a.lat, a.lon, a.lat, a.lon), 0.0);
        for b in &observers {
            let ab = horizontal_distance_ft(a.lat, a.lon, b.lat, b.lon);
            let ba = horizontal_distance_ft(b.lat, b.lon, a.lat, a.lon);
            assert!((ab - ba).abs() < 1e-6, "{} <-> {}", a.id, b.id);
        }
    }
}

#[test]
fn resolver_can_be_shared_between_threads() {
    let resolver = ProfileResolver::builtin().unwrap();
    let observers = default_observers();
    let track = flightaware_track();
    let types = ["S76", "GLF5", "C172", "ZZZZ"];

    let results: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = types
            .iter()
            .map(|type_code| {
                let (resolver, observers, track) = (&resolver, &observers, &track);
                scope.spawn(move || {
                    calculate_flight_noise_impact(
                        resolver,
                        &ImpactConfig::default(),
                        type_code,
                        type_code,
                        track,
                        Direction::Arrival,
                        None,
                        observers,
                    )
                    .max_ground_db
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let sequential = estimate_at_position(
        &resolver,
        "S76",
        &track[4],
        &observers[0],
        Direction::Arrival,
        None,
    );
    assert_eq!(results.len(), types.len());
    assert!(results[0] >= sequential.db);
}
