pub mod attenuation;
pub mod classify;
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod impact;
pub mod models;
pub mod observers;
pub mod profiles;

pub use attenuation::{calculate_ground_noise, lateral_attenuation_db};
pub use classify::classify_aircraft;
pub use error::{ParseDirectionError, ProfileError};
pub use estimator::{estimate_at_position, simple_noise_estimate};
pub use geometry::{bearing_deg, horizontal_distance_ft, lateral_angle_deg, slant_distance_ft};
pub use impact::{calculate_flight_noise_impact, ImpactConfig};
pub use models::{
    AircraftCategory, Confidence, DataSource, Direction, EstimateSource, FlightNoiseImpact,
    NoiseEstimate, NoiseProfile, NoiseProfileSummary, ObserverImpact, ObserverLocation,
    TrackPosition, WeightClass,
};
pub use observers::{default_observers, KJPX_LAT, KJPX_LON};
pub use profiles::{epnl_to_lamax, CategoryDefaults, CategoryLevels, ProfileResolver};
