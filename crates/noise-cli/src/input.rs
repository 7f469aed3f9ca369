//! Track and observer file loading, plus input validation.

use anyhow::{bail, Context, Result};
use jpx_noise_core::{classify_aircraft, AircraftCategory, ObserverLocation, TrackPosition};
use serde::Deserialize;
use std::path::Path;

/// Either a bare array of positions or a FlightAware track response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrackFile {
    Positions(Vec<TrackPosition>),
    Response { positions: Vec<TrackPosition> },
}

pub fn load_track(path: &Path) -> Result<Vec<TrackPosition>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read track file {}", path.display()))?;
    parse_track(&json).with_context(|| format!("invalid track file {}", path.display()))
}

/// Parse and validate a track, returning positions in time order.
pub fn parse_track(json: &str) -> Result<Vec<TrackPosition>> {
    let mut positions = match serde_json::from_str(json)? {
        TrackFile::Positions(positions) => positions,
        TrackFile::Response { positions } => positions,
    };

    for (idx, position) in positions.iter().enumerate() {
        if !position.latitude.is_finite() || !position.longitude.is_finite() {
            bail!("position {idx} has non-finite coordinates");
        }
        if !position.altitude_ft.is_finite() || position.altitude_ft < 0.0 {
            bail!("position {idx} has invalid altitude {}", position.altitude_ft);
        }
    }

    if !positions.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp) {
        tracing::debug!(count = positions.len(), "sorting out-of-order track positions");
        positions.sort_by_key(|position| position.timestamp);
    }
    Ok(positions)
}

pub fn load_observers(path: &Path) -> Result<Vec<ObserverLocation>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read observer file {}", path.display()))?;
    let observers: Vec<ObserverLocation> = serde_json::from_str(&json)
        .with_context(|| format!("invalid observer file {}", path.display()))?;
    if observers.is_empty() {
        bail!("observer file {} lists no observers", path.display());
    }
    Ok(observers)
}

/// Category hint from an explicit flag, else from the type designator.
///
/// A designator that does not classify yields no hint, so the profile is
/// reported as unverified rather than as a category estimate.
pub fn category_hint(category: Option<&str>, type_code: &str) -> Option<AircraftCategory> {
    match category {
        Some(category) => Some(AircraftCategory::from_hint(category)),
        None => match classify_aircraft(type_code) {
            AircraftCategory::Unknown => None,
            category => Some(category),
        },
    }
}
