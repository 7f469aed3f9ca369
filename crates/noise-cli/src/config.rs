//! CLI configuration from environment.

use jpx_noise_core::ImpactConfig;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Certified profile export to load instead of the bundled table
    pub profile_path: Option<PathBuf>,
    pub impact: ImpactConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ImpactConfig::default();
        Self {
            profile_path: lookup("JPX_PROFILE_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            impact: ImpactConfig {
                position_interval_secs: lookup("JPX_POSITION_INTERVAL_SECS")
                    .and_then(|s| s.parse().ok())
                    .filter(|secs: &f64| secs.is_finite() && *secs > 0.0)
                    .unwrap_or(defaults.position_interval_secs),
                gap_tolerance_factor: lookup("JPX_GAP_TOLERANCE")
                    .and_then(|s| s.parse().ok())
                    .filter(|factor: &f64| factor.is_finite() && *factor >= 1.0)
                    .unwrap_or(defaults.gap_tolerance_factor),
            },
        }
    }
}
