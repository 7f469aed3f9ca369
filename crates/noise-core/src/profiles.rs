//! Aircraft noise profiles: certified lookup with category fallback.
//!
//! A [`ProfileResolver`] is built once (from the bundled table or a
//! dashboard `icaoToEasaMap.json` export) and then only read. Resolution
//! never fails; types without certification data get a category estimate
//! tagged with low confidence.

use crate::error::ProfileError;
use crate::models::{AircraftCategory, Confidence, DataSource, NoiseProfile, WeightClass};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Approach is assumed this many dB quieter than takeoff when only one
/// level is known.
pub const APPROACH_OFFSET_DB: f64 = 4.0;

/// LAmax ~= EPNL - 13 (varies by aircraft type).
pub const EPNL_TO_LAMAX_OFFSET_DB: f64 = 13.0;

/// Type code reported for empty designators.
pub const UNKNOWN_TYPE_CODE: &str = "UNKN";

const BUILTIN_PROFILES_JSON: &str = include_str!("../data/certified_profiles.json");

/// Convert a certification EPNL value to an approximate LAmax.
pub fn epnl_to_lamax(epnl: f64) -> f64 {
    ((epnl - EPNL_TO_LAMAX_OFFSET_DB) * 10.0).round() / 10.0
}

/// Category average levels (LAmax at 1000 ft).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryLevels {
    pub default: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heavy: Option<f64>,
}

impl CategoryLevels {
    const fn weighted(default: f64, light: f64, medium: f64, heavy: f64) -> Self {
        Self {
            default,
            light: Some(light),
            medium: Some(medium),
            heavy: Some(heavy),
        }
    }

    /// Level for a weight class, or the category default when the category
    /// is not subdivided.
    pub fn level(&self, weight: WeightClass) -> f64 {
        let weighted = match weight {
            WeightClass::Light => self.light,
            WeightClass::Medium => self.medium,
            WeightClass::Heavy => self.heavy,
        };
        weighted.unwrap_or(self.default)
    }
}

/// Fallback levels for every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefaults {
    pub helicopter: CategoryLevels,
    pub jet: CategoryLevels,
    pub fixed_wing: CategoryLevels,
    pub unknown: CategoryLevels,
}

impl Default for CategoryDefaults {
    fn default() -> Self {
        Self {
            helicopter: CategoryLevels::weighted(84.0, 78.0, 84.0, 90.0), // R44 / EC135 / S76
            jet: CategoryLevels::weighted(88.0, 82.0, 88.0, 94.0), // Phenom 100 / GIV / G650
            fixed_wing: CategoryLevels::weighted(76.0, 72.0, 76.0, 82.0), // C172 / SR22 / King Air
            unknown: CategoryLevels {
                default: 80.0,
                light: None,
                medium: None,
                heavy: None,
            },
        }
    }
}

impl CategoryDefaults {
    pub fn levels(&self, category: AircraftCategory) -> &CategoryLevels {
        match category {
            AircraftCategory::Helicopter => &self.helicopter,
            AircraftCategory::Jet => &self.jet,
            AircraftCategory::FixedWing => &self.fixed_wing,
            AircraftCategory::Unknown => &self.unknown,
        }
    }

    pub fn default_db(&self, category: AircraftCategory) -> f64 {
        self.levels(category).default
    }
}

/// One entry of the certified data export.
///
/// Levels may be given directly (`takeoff_db`/`approach_db`) or only as
/// certification EPNL values, in which case they are derived.
#[derive(Debug, Clone, Deserialize)]
pub struct CertifiedRecord {
    #[serde(default, alias = "easa_manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(default, alias = "easa_model")]
    pub model: Option<String>,
    #[serde(default)]
    pub category: AircraftCategory,
    #[serde(default)]
    pub takeoff_db: Option<f64>,
    #[serde(default)]
    pub approach_db: Option<f64>,
    #[serde(default)]
    pub takeoff_epnl: Option<f64>,
    #[serde(default)]
    pub flyover_epnl: Option<f64>,
    #[serde(default)]
    pub lateral_epnl: Option<f64>,
    #[serde(default)]
    pub approach_epnl: Option<f64>,
    #[serde(default = "default_record_source")]
    pub data_source: DataSource,
    #[serde(default = "default_record_confidence")]
    pub confidence: Confidence,
}

fn default_record_source() -> DataSource {
    DataSource::Certified
}

fn default_record_confidence() -> Confidence {
    Confidence::Medium
}

impl CertifiedRecord {
    /// Build a profile from this record.
    pub fn into_profile(
        self,
        type_code: &str,
        defaults: &CategoryDefaults,
    ) -> Result<NoiseProfile, ProfileError> {
        let type_code = normalize_type_code(type_code);

        let measured_takeoff_db = self
            .takeoff_db
            .or_else(|| self.takeoff_epnl.or(self.flyover_epnl).map(epnl_to_lamax));
        let takeoff_level_db =
            measured_takeoff_db.unwrap_or_else(|| defaults.default_db(self.category));
        let approach_level_db = self
            .approach_db
            .or_else(|| self.approach_epnl.map(epnl_to_lamax))
            .unwrap_or(takeoff_level_db - APPROACH_OFFSET_DB);

        for (label, level) in [("takeoff", takeoff_level_db), ("approach", approach_level_db)] {
            if !level.is_finite() || level <= 0.0 {
                return Err(ProfileError::InvalidRecord {
                    type_code,
                    reason: format!("{label} level {level} dB is not a positive number"),
                });
            }
        }

        // A record without a takeoff level or EPNL carries category levels.
        let (data_source, confidence) = match measured_takeoff_db {
            Some(_) => (self.data_source, self.confidence),
            None if self.data_source == DataSource::Certified => {
                tracing::warn!(
                    type_code = %type_code,
                    "certified record has no levels, using category estimate"
                );
                (DataSource::CategoryEstimate, Confidence::Low)
            }
            None => (self.data_source, self.confidence),
        };

        Ok(NoiseProfile {
            type_code,
            manufacturer: self.manufacturer,
            model: self.model,
            category: self.category,
            takeoff_level_db,
            approach_level_db,
            lateral_epnl: self.lateral_epnl,
            flyover_epnl: self.flyover_epnl,
            approach_epnl: self.approach_epnl,
            data_source,
            confidence: Confidence::for_source(data_source, confidence),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CertifiedDataFile {
    mappings: HashMap<String, CertifiedRecord>,
    #[serde(default)]
    category_averages: Option<CategoryDefaults>,
}

/// Immutable lookup service from type designator to noise profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileResolver {
    certified: HashMap<String, NoiseProfile>,
    defaults: CategoryDefaults,
}

impl ProfileResolver {
    /// Resolver with no certified data; everything resolves to category
    /// estimates.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(
        profiles: impl IntoIterator<Item = NoiseProfile>,
        defaults: CategoryDefaults,
    ) -> Self {
        let certified = profiles
            .into_iter()
            .map(|mut profile| {
                profile.type_code = normalize_type_code(&profile.type_code);
                profile.confidence =
                    Confidence::for_source(profile.data_source, profile.confidence);
                (profile.type_code.clone(), profile)
            })
            .collect();
        Self { certified, defaults }
    }

    /// Resolver over the certification table bundled with this crate.
    pub fn builtin() -> Result<Self, ProfileError> {
        Self::from_json_str(BUILTIN_PROFILES_JSON)
    }

    /// Parse a certified data export (`{"mappings": {...}, "category_averages": {...}}`).
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let file: CertifiedDataFile = serde_json::from_str(json)?;
        let defaults = file.category_averages.unwrap_or_default();

        let mut profiles = Vec::with_capacity(file.mappings.len());
        for (type_code, record) in file.mappings {
            profiles.push(record.into_profile(&type_code, &defaults)?);
        }

        tracing::debug!(count = profiles.len(), "loaded certified noise profiles");
        Ok(Self::new(profiles, defaults))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Process-wide resolver over the bundled table, built on first use.
    pub fn shared() -> &'static ProfileResolver {
        static SHARED: OnceLock<ProfileResolver> = OnceLock::new();
        SHARED.get_or_init(|| {
            Self::builtin().unwrap_or_else(|err| {
                tracing::warn!(
                    error = %err,
                    "bundled noise profiles unavailable, using category averages"
                );
                Self::empty()
            })
        })
    }

    pub fn len(&self) -> usize {
        self.certified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certified.is_empty()
    }

    pub fn category_defaults(&self) -> &CategoryDefaults {
        &self.defaults
    }

    /// Certified entry for a type code, if any.
    pub fn certified(&self, type_code: &str) -> Option<&NoiseProfile> {
        self.certified.get(&normalize_type_code(type_code))
    }

    /// Resolve a profile for `type_code`.
    ///
    /// Certified entries are returned as stored. Otherwise a category
    /// estimate is synthesized from `category_hint`; with no hint the
    /// `unknown` average is used and the profile is marked unverified.
    pub fn resolve_profile(
        &self,
        type_code: &str,
        category_hint: Option<AircraftCategory>,
    ) -> NoiseProfile {
        let code = normalize_type_code(type_code);
        if let Some(profile) = self.certified.get(&code) {
            return profile.clone();
        }

        let (category, data_source) = match category_hint {
            Some(category) => (category, DataSource::CategoryEstimate),
            None => (AircraftCategory::Unknown, DataSource::Unverified),
        };
        tracing::debug!(
            type_code = %code,
            %category,
            "no certified noise data, using category average"
        );

        let takeoff_level_db = self.defaults.default_db(category);
        NoiseProfile {
            type_code: if code.is_empty() {
                UNKNOWN_TYPE_CODE.to_string()
            } else {
                code
            },
            manufacturer: None,
            model: None,
            category,
            takeoff_level_db,
            approach_level_db: takeoff_level_db - APPROACH_OFFSET_DB,
            lateral_epnl: None,
            flyover_epnl: None,
            approach_epnl: None,
            data_source,
            confidence: Confidence::Low,
        }
    }

    /// Category estimate for a weight class.
    pub fn category_level_db(&self, category: AircraftCategory, weight: WeightClass) -> f64 {
        self.defaults.levels(category).level(weight)
    }
}

fn normalize_type_code(type_code: &str) -> String {
    type_code.trim().to_ascii_uppercase()
}
