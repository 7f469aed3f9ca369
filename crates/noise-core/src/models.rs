//! Core data models for ground noise estimation.

use crate::error::ParseDirectionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse aircraft category used to pick fallback noise levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftCategory {
    Helicopter,
    Jet,
    #[serde(alias = "fixed-wing", alias = "fixedwing")]
    FixedWing,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AircraftCategory {
    pub const ALL: [AircraftCategory; 4] = [
        AircraftCategory::Helicopter,
        AircraftCategory::Jet,
        AircraftCategory::FixedWing,
        AircraftCategory::Unknown,
    ];

    /// Parse a free-form category hint. Unrecognized hints map to `Unknown`.
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().as_str() {
            "helicopter" => Self::Helicopter,
            "jet" => Self::Jet,
            "fixed_wing" | "fixed-wing" | "fixedwing" => Self::FixedWing,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helicopter => "helicopter",
            Self::Jet => "jet",
            Self::FixedWing => "fixed_wing",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight class within a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightClass {
    Light,
    #[default]
    Medium,
    Heavy,
}

/// Provenance of a noise profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[serde(alias = "EASA_CERTIFIED", alias = "CERTIFIED")]
    Certified,
    #[serde(alias = "CATEGORY_ESTIMATE")]
    CategoryEstimate,
    #[serde(alias = "UNVERIFIED")]
    Unverified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Anything not backed by certification data is low confidence.
    pub fn for_source(source: DataSource, declared: Confidence) -> Self {
        match source {
            DataSource::Certified => declared,
            DataSource::CategoryEstimate | DataSource::Unverified => Confidence::Low,
        }
    }
}

/// Where a computed estimate's source level came from.
///
/// `Calculated` is what the attenuation model reports on its own; the
/// estimator replaces it with the provenance of the resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    Calculated,
    Certified,
    CategoryEstimate,
    Unverified,
}

impl From<DataSource> for EstimateSource {
    fn from(source: DataSource) -> Self {
        match source {
            DataSource::Certified => Self::Certified,
            DataSource::CategoryEstimate => Self::CategoryEstimate,
            DataSource::Unverified => Self::Unverified,
        }
    }
}

/// Flight direction relative to the airport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Arrival,
    Departure,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Departure => "departure",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrival" | "arr" => Ok(Self::Arrival),
            "departure" | "dep" => Ok(Self::Departure),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Acoustic source characteristics for one aircraft type.
///
/// Levels are LAmax at the 1000 ft certification reference distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseProfile {
    pub type_code: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub category: AircraftCategory,
    pub takeoff_level_db: f64,
    pub approach_level_db: f64,
    #[serde(default)]
    pub lateral_epnl: Option<f64>,
    #[serde(default)]
    pub flyover_epnl: Option<f64>,
    #[serde(default)]
    pub approach_epnl: Option<f64>,
    pub data_source: DataSource,
    pub confidence: Confidence,
}

impl NoiseProfile {
    pub fn is_certified(&self) -> bool {
        self.data_source == DataSource::Certified
    }

    /// Reference level for the given direction: approach for arrivals,
    /// takeoff for everything else.
    pub fn source_level_db(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Arrival => self.approach_level_db,
            Direction::Departure => self.takeoff_level_db,
        }
    }
}

/// Single sampled point along a flight track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPosition {
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
    #[serde(alias = "altitude")]
    pub altitude_ft: f64,
    #[serde(default, alias = "heading")]
    pub heading_deg: Option<f64>,
    #[serde(default, alias = "groundspeed")]
    pub groundspeed_kt: Option<f64>,
}

impl TrackPosition {
    /// Create a track position with only required fields.
    pub fn new(timestamp: DateTime<Utc>, latitude: f64, longitude: f64, altitude_ft: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            altitude_ft,
            heading_deg: None,
            groundspeed_kt: None,
        }
    }

    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = Some(heading_deg);
        self
    }

    pub fn with_groundspeed(mut self, groundspeed_kt: f64) -> Self {
        self.groundspeed_kt = Some(groundspeed_kt);
        self
    }
}

/// Fixed ground point where noise is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl ObserverLocation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
        }
    }
}

/// Ground-level noise estimate for one aircraft position and one observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseEstimate {
    pub db: f64,
    pub source: EstimateSource,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slant_distance_ft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_distance_ft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_attenuation_db: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmospheric_attenuation_db: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lateral_attenuation_db: Option<f64>,
}

/// Profile fields carried in a flight impact summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseProfileSummary {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub category: AircraftCategory,
    pub takeoff_db: f64,
    pub approach_db: f64,
    pub data_source: DataSource,
    pub confidence: Confidence,
}

impl From<&NoiseProfile> for NoiseProfileSummary {
    fn from(profile: &NoiseProfile) -> Self {
        Self {
            manufacturer: profile.manufacturer.clone(),
            model: profile.model.clone(),
            category: profile.category,
            takeoff_db: profile.takeoff_level_db,
            approach_db: profile.approach_level_db,
            data_source: profile.data_source,
            confidence: profile.confidence,
        }
    }
}

/// Exposure summary for one observer over a whole flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverImpact {
    pub observer_id: String,
    pub observer_name: String,
    pub max_db: f64,
    pub closest_approach_ft: f64,
    pub time_above_65db: f64,
    pub time_above_75db: f64,
}

/// Noise impact of one flight across all observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightNoiseImpact {
    pub flight_id: String,
    pub aircraft_type: String,
    pub direction: Direction,
    pub noise_profile: NoiseProfileSummary,
    pub max_ground_db: f64,
    pub avg_ground_db: f64,
    pub exposure_seconds: f64,
    pub track_count: usize,
    /// Elapsed time between first and last sample timestamps
    pub track_duration_seconds: f64,
    /// Set when sample spacing departs from the configured cadence
    pub irregular_sampling: bool,
    pub observer_impacts: Vec<ObserverImpact>,
}
